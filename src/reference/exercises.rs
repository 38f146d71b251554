//! Exercise reference table

use std::sync::OnceLock;

use crate::models::{Exercise, MuscleGroup};

fn exercise(
    id: &str,
    name: &str,
    muscle_group: MuscleGroup,
    equipment: &str,
    description: &str,
    tips: &[&str],
    image_url: &str,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        muscle_group,
        equipment: equipment.to_string(),
        description: description.to_string(),
        tips: tips.iter().map(|t| t.to_string()).collect(),
        image_url: image_url.to_string(),
    }
}

pub fn exercise_table() -> &'static [Exercise] {
    static TABLE: OnceLock<Vec<Exercise>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

pub fn muscle_groups() -> &'static [MuscleGroup] {
    &MuscleGroup::ALL
}

/// Exercises for one group, in table order
pub fn exercises_by_muscle_group(group: MuscleGroup) -> Vec<&'static Exercise> {
    exercise_table()
        .iter()
        .filter(|e| e.muscle_group == group)
        .collect()
}

pub fn find_exercise(id: &str) -> Option<&'static Exercise> {
    exercise_table().iter().find(|e| e.id == id)
}

fn build_table() -> Vec<Exercise> {
    vec![
        exercise(
            "c1",
            "Barbell Bench Press",
            MuscleGroup::Chest,
            "Barbell",
            "Classic chest builder targeting pectoralis major",
            &["Keep feet flat", "Arch lower back slightly", "Lower to mid-chest"],
            "https://sportbama.com/images/barbell-bench-press-benefits-1024x576.jpg",
        ),
        exercise(
            "c2",
            "Incline Dumbbell Press",
            MuscleGroup::Chest,
            "Dumbbells",
            "Targets upper chest fibers",
            &["30-45 degree angle", "Control the weight", "Squeeze at top"],
            "https://findhealthtips.com/wp-content/uploads/2015/08/Incline-dumbbell-press.jpg",
        ),
        exercise(
            "c3",
            "Decline Bench Press",
            MuscleGroup::Chest,
            "Barbell",
            "Targets lower chest fibers",
            &["Secure legs properly", "Control descent", "Full range of motion"],
            "https://bodybuilding-wizard.com/wp-content/uploads/2015/11/decline-dumbbell-bench-press-guide-1-8.jpg",
        ),
        exercise(
            "c4",
            "Dumbbell Fly",
            MuscleGroup::Chest,
            "Dumbbells",
            "Chest isolation for stretch",
            &["Slight bend in elbows", "Feel the stretch", "Don't go too heavy"],
            "https://www.verywellfit.com/thmb/h-GF1obQrmZgJ1ge3LYbbBl48vc=/4992x3872/filters:no_upscale():max_bytes(150000):strip_icc()/dumbbell-fly-on-incline-bench--steps--162974795-99bf05fa00e14abf8c240b41ed567fcd.jpg",
        ),
        exercise(
            "c5",
            "Cable Crossover",
            MuscleGroup::Chest,
            "Cable Machine",
            "Constant tension throughout",
            &["Lean slightly forward", "Cross hands at bottom", "Control the negative"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2024/02/cable-crossover-exercise-overview.png",
        ),
        exercise(
            "c6",
            "Push-Ups",
            MuscleGroup::Chest,
            "Bodyweight",
            "Fundamental movement pattern",
            &["Keep core tight", "Full range of motion", "Vary hand position"],
            "https://www.fitnesseducation.edu.au/wp-content/uploads/2017/03/Pushups.jpg",
        ),
        exercise(
            "c7",
            "Chest Dips",
            MuscleGroup::Chest,
            "Dip Bars",
            "Compound chest movement",
            &["Lean forward", "Go deep", "Control the movement"],
            "https://www.aleanlife.com/wp-content/uploads/2014/01/chest-chest-dips.jpg",
        ),
        exercise(
            "c8",
            "Pec Deck Machine",
            MuscleGroup::Chest,
            "Machine",
            "Safe isolation exercise",
            &["Squeeze at peak", "Control return", "Keep back flat"],
            "https://th.bing.com/th/id/R.7bbbaaafbc3b5dfe109655a8e90a037e?rik=VlQ6mlubEe29mg&riu=http%3a%2f%2f1.bp.blogspot.com%2f-izV7V-6GMBg%2fUcCena95sKI%2fAAAAAAAAAyU%2fHW7Y03lqLp8%2fs1600%2fPec-Deck.jpg&ehk=wuKbQ4oCCIU0v%2fV8LK8pMprtxc3OAXjmPJmE5oqFMAY%3d&risl=&pid=ImgRaw&r=0",
        ),
        exercise(
            "b1",
            "Deadlift",
            MuscleGroup::Back,
            "Barbell",
            "King of compound lifts",
            &["Keep bar close", "Neutral spine", "Drive through heels"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2023/10/deficit-deadlift-benefits.png",
        ),
        exercise(
            "b2",
            "Bent Over Row",
            MuscleGroup::Back,
            "Barbell",
            "Back mass builder",
            &["45-degree torso", "Pull to navel", "Squeeze shoulder blades"],
            "https://liftmanual.com/wp-content/uploads/2023/04/barbell-reverse-grip-bent-over-row-1024x538.jpg",
        ),
        exercise(
            "b3",
            "Lat Pulldown",
            MuscleGroup::Back,
            "Cable Machine",
            "Lat width developer",
            &["Pull to upper chest", "Lean back slightly", "Control the negative"],
            "https://i.pinimg.com/736x/c0/fe/9e/c0fe9ed6b12073800f817edb57957eaf.jpg",
        ),
        exercise(
            "b4",
            "Pull-Ups",
            MuscleGroup::Back,
            "Bodyweight",
            "Ultimate back exercise",
            &["Full extension", "Lead with chest", "Vary grip width"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2023/04/close-grip-pull-up-benefits.png",
        ),
        exercise(
            "b5",
            "Seated Cable Row",
            MuscleGroup::Back,
            "Cable Machine",
            "Mid-back focus",
            &["Keep chest up", "Pull to stomach", "Squeeze at contraction"],
            "https://fitnessvolt.com/wp-content/uploads/2023/07/Close-Grip-Row-Muscles-Worked-1140x570.jpg",
        ),
        exercise(
            "b6",
            "T-Bar Row",
            MuscleGroup::Back,
            "Barbell",
            "Thickness builder",
            &["Keep back flat", "Pull high", "Control the weight"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2023/03/t-bar-row-benefits.png",
        ),
        exercise(
            "b7",
            "Single Arm Dumbbell Row",
            MuscleGroup::Back,
            "Dumbbell",
            "Unilateral work",
            &["Support on bench", "Pull to hip", "Full stretch at bottom"],
            "https://th.bing.com/th/id/R.83249e254b55c4321bfa31f37827a5d1?rik=26NY2ibRAZVacQ&riu=http%3a%2f%2fbodybuilding-wizard.com%2fwp-content%2fuploads%2f2014%2f04%2fone-arm-dumbbell-row-exercise-guide-01.jpg&ehk=y1j4lUzLtemMjFObdLj3N9eHQ2tu1mLVM7P%2bG9DmiTk%3d&risl=&pid=ImgRaw&r=0",
        ),
        exercise(
            "b8",
            "Face Pulls",
            MuscleGroup::Back,
            "Cable Machine",
            "Rear delt/traps",
            &["Pull to forehead", "External rotation", "Squeeze at end"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2023/06/face-pull-benefits.png",
        ),
        exercise(
            "s1",
            "Overhead Press",
            MuscleGroup::Shoulders,
            "Barbell",
            "Shoulder mass builder",
            &["Core tight", "Press overhead", "Full lockout"],
            "https://www.burnthefatinnercircle.com/members/images/1660b.jpg",
        ),
        exercise(
            "s2",
            "Dumbbell Shoulder Press",
            MuscleGroup::Shoulders,
            "Dumbbells",
            "Balanced development",
            &["Control the path", "Don't flare elbows", "Press to full extension"],
            "https://liftmanual.com/wp-content/uploads/2023/04/dumbbell-seated-shoulder-press-1024x538.jpg",
        ),
        exercise(
            "s3",
            "Lateral Raises",
            MuscleGroup::Shoulders,
            "Dumbbells",
            "Side delt isolation",
            &["Slight forward lean", "Lead with pinky", "Don't swing"],
            "https://www.fitliferegime.com/wp-content/uploads/2021/11/Dumbbell-one-arm-lateral-raise.jpg",
        ),
        exercise(
            "s4",
            "Front Raises",
            MuscleGroup::Shoulders,
            "Dumbbells",
            "Front delt focus",
            &["Alternate arms", "Control the weight", "Don't use momentum"],
            "https://www.aleanlife.com/wp-content/uploads/2023/02/dumbbell-front-raise.jpg",
        ),
        exercise(
            "s5",
            "Reverse Fly",
            MuscleGroup::Shoulders,
            "Dumbbells",
            "Rear delt focus",
            &["Bend at hips", "Lead with elbows", "Squeeze at top"],
            "https://liftmanual.com/wp-content/uploads/2023/04/dumbbell-rear-lateral-raise-1024x538.jpg",
        ),
        exercise(
            "s6",
            "Arnold Press",
            MuscleGroup::Shoulders,
            "Dumbbells",
            "Complete shoulder work",
            &["Start palms facing you", "Rotate as you press", "Full range of motion"],
            "https://www.bodybuildingmealplan.com/wp-content/uploads/shutterstock_428906836-scaled.jpg",
        ),
        exercise(
            "s7",
            "Upright Row",
            MuscleGroup::Shoulders,
            "Barbell",
            "Traps and delts",
            &["Wide grip for delts", "Pull to chin", "Lead with elbows"],
            "https://www.bodybuildingmealplan.com/wp-content/uploads/Wide-Grip-Upright-Row-scaled.jpg",
        ),
        exercise(
            "s8",
            "Shrugs",
            MuscleGroup::Shoulders,
            "Barbell/Dumbbells",
            "Trap development",
            &["Heavy weight OK", "Hold at top", "No rolling"],
            "https://tse4.mm.bing.net/th/id/OIP.SiuNqkRTpiXGXOvrJQcHGgHaFj?rs=1&pid=ImgDetMain&o=7&rm=3",
        ),
        exercise(
            "a1",
            "Barbell Curl",
            MuscleGroup::Arms,
            "Barbell",
            "Bicep mass builder",
            &["Keep elbows fixed", "Full range", "Control negative"],
            "https://cdn.shopify.com/s/files/1/1075/8446/files/exercise-41.jpg?0",
        ),
        exercise(
            "a2",
            "Dumbbell Curl",
            MuscleGroup::Arms,
            "Dumbbells",
            "Bicep isolation",
            &["Supinate at top", "Alternate or together", "No swinging"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2023/04/dumbbell-curl-benefits.png",
        ),
        exercise(
            "a3",
            "Hammer Curl",
            MuscleGroup::Arms,
            "Dumbbells",
            "Brachialis focus",
            &["Neutral grip", "Control the weight", "Keep elbows steady"],
            "https://tse1.mm.bing.net/th/id/OIP.I8qmpYgzM9V3lGFzbcw5JgHaH6?rs=1&pid=ImgDetMain&o=7&rm=3",
        ),
        exercise(
            "a4",
            "Preacher Curl",
            MuscleGroup::Arms,
            "Barbell/Dumbbell",
            "Strict isolation",
            &["Full stretch", "Control the negative", "Don't swing"],
            "https://workoutguru.fit/wp-content/uploads/2023/10/ez-barbell-preacher-curl-video-exercise-guide-tips.jpg",
        ),
        exercise(
            "a5",
            "Tricep Pushdown",
            MuscleGroup::Arms,
            "Cable Machine",
            "Tricep isolation",
            &["Keep elbows fixed", "Full extension", "Squeeze at bottom"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2023/03/trice-pushdown-benefits.png",
        ),
        exercise(
            "a6",
            "Skull Crushers",
            MuscleGroup::Arms,
            "Barbell/EZ Bar",
            "Tricep mass",
            &["Lower to forehead", "Keep elbows in", "Control the weight"],
            "https://www.blackridgefitness.com/wp-content/uploads/2021/01/3a5490cf4a643283ac9c771a88bccd98-768x403.jpg",
        ),
        exercise(
            "a7",
            "Overhead Tricep Extension",
            MuscleGroup::Arms,
            "Dumbbell/Cable",
            "Long head focus",
            &["Keep elbows close", "Full stretch", "Control throughout"],
            "https://www.fitliferegime.com/wp-content/uploads/2022/01/Two-Arm-Dumbbell-Extension..jpg",
        ),
        exercise(
            "a8",
            "Close Grip Bench Press",
            MuscleGroup::Arms,
            "Barbell",
            "Tricep compound",
            &["Hands shoulder-width", "Elbows close to body", "Full range"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2022/01/close-grip-bench-benefits.jpg",
        ),
        exercise(
            "a9",
            "Concentration Curl",
            MuscleGroup::Arms,
            "Dumbbell",
            "Peak contraction",
            &["Elbow on inner thigh", "Slow and controlled", "Squeeze at top"],
            "https://liftmanual.com/wp-content/uploads/2023/04/dumbbell-concentration-curl.jpg",
        ),
        exercise(
            "a10",
            "Tricep Dips",
            MuscleGroup::Arms,
            "Bench/Bars",
            "Bodyweight tricep",
            &["Keep body close", "Go deep", "Don't flare elbows"],
            "https://www.aleanlife.com/wp-content/uploads/2020/08/tricep-dips-with-chair.jpg",
        ),
        exercise(
            "l1",
            "Barbell Squat",
            MuscleGroup::Legs,
            "Barbell",
            "King of leg exercises",
            &["Break at hips first", "Knees track toes", "Depth is key"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2022/06/the-barbell-squat.jpg",
        ),
        exercise(
            "l2",
            "Leg Press",
            MuscleGroup::Legs,
            "Machine",
            "Quad focused",
            &["Don't lock knees", "Control the descent", "Vary foot position"],
            "https://sportivetricksstorage.blob.core.windows.net/images/articles/training/technique/leg-press-muscles-worked/2-muscles-worked.webp",
        ),
        exercise(
            "l3",
            "Romanian Deadlift",
            MuscleGroup::Legs,
            "Barbell",
            "Hamstring focus",
            &["Slight knee bend", "Hinge at hips", "Feel the stretch"],
            "https://bodybuilding-wizard.com/wp-content/uploads/2015/01/romanian-deadlift-exercise-1-2-6-9.jpg",
        ),
        exercise(
            "l4",
            "Leg Curl",
            MuscleGroup::Legs,
            "Machine",
            "Hamstring isolation",
            &["Full range of motion", "Squeeze at peak", "Control negative"],
            "https://workoutguru.fit/wp-content/uploads/2023/10/lever-seated-leg-curl-video-exercise-guide-tips-1024x576.jpg",
        ),
        exercise(
            "l5",
            "Leg Extension",
            MuscleGroup::Legs,
            "Machine",
            "Quad isolation",
            &["Full extension", "Pause at top", "Control descent"],
            "https://muscu-street-et-crossfit.fr/wp-content/uploads/2022/09/Muscles-Leg-Extension.001.jpeg",
        ),
        exercise(
            "l6",
            "Lunges",
            MuscleGroup::Legs,
            "Bodyweight/Dumbbells",
            "Unilateral work",
            &["Knee tracks toe", "Upright torso", "Step far enough"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2023/07/split-squat-vs-lunge.png",
        ),
        exercise(
            "l7",
            "Calf Raises",
            MuscleGroup::Legs,
            "Machine/Bodyweight",
            "Calf development",
            &["Full stretch at bottom", "Pause at top", "Slow negatives"],
            "https://fitnessvolt.com/wp-content/uploads/2021/02/dumbbell-standing-calf-raise-.jpg",
        ),
        exercise(
            "l8",
            "Bulgarian Split Squat",
            MuscleGroup::Legs,
            "Dumbbells/Bodyweight",
            "Single leg power",
            &["Back foot elevated", "Stay upright", "Control descent"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2023/08/bulgarian-split-squat-variations.png",
        ),
        exercise(
            "l9",
            "Hack Squat",
            MuscleGroup::Legs,
            "Machine",
            "Quad dominant",
            &["Feet lower for quads", "Full depth", "Don't lock out"],
            "https://tse4.mm.bing.net/th/id/OIP.-I8mavUzVgjL_NsHsosztQHaEK?rs=1&pid=ImgDetMain&o=7&rm=3",
        ),
        exercise(
            "l10",
            "Sumo Deadlift",
            MuscleGroup::Legs,
            "Barbell",
            "Inner thigh focus",
            &["Wide stance", "Toes out", "Push floor apart"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2022/05/is-sumo-deadlift-easier.jpg",
        ),
        exercise(
            "co1",
            "Plank",
            MuscleGroup::Core,
            "Bodyweight",
            "Core stability",
            &["Keep body straight", "Squeeze glutes", "Don't drop hips"],
            "https://cdn-ami-drupal.heartyhosting.com/sites/muscleandfitness.com/files/plank-chest-main.jpg",
        ),
        exercise(
            "co2",
            "Hanging Leg Raise",
            MuscleGroup::Core,
            "Pull-up Bar",
            "Lower ab focus",
            &["Control the swing", "Raise legs high", "Slow descent"],
            "https://kinxlearning.com/cdn/shop/files/exercise-21_923x.jpg?v=1613154789",
        ),
        exercise(
            "co3",
            "Cable Crunch",
            MuscleGroup::Core,
            "Cable Machine",
            "Weighted ab work",
            &["Crunch down", "Don't pull with arms", "Feel the squeeze"],
            "https://www.inspireusafoundation.org/wp-content/uploads/2023/10/cable-kneeling-crunch-benefits.png",
        ),
        exercise(
            "co4",
            "Russian Twist",
            MuscleGroup::Core,
            "Bodyweight/Weight",
            "Oblique focus",
            &["Lean back slightly", "Rotate fully", "Keep feet elevated"],
            "https://www.lyfta.app/thumbnails/43931201.jpg",
        ),
        exercise(
            "co5",
            "Ab Wheel Rollout",
            MuscleGroup::Core,
            "Ab Wheel",
            "Advanced core",
            &["Keep core tight", "Go as far as possible", "Control the roll"],
            "https://tse3.mm.bing.net/th/id/OIP.8vRBTgvEv5CuYm5l6O9crQAAAA?rs=1&pid=ImgDetMain&o=7&rm=3",
        ),
        exercise(
            "co6",
            "Mountain Climbers",
            MuscleGroup::Core,
            "Bodyweight",
            "Core and cardio",
            &["Keep hips down", "Fast pace", "Full range"],
            "https://liftmanual.com/wp-content/uploads/2023/04/mountain-climber-jump.jpg",
        ),
        exercise(
            "co7",
            "Bicycle Crunches",
            MuscleGroup::Core,
            "Bodyweight",
            "Oblique activation",
            &["Elbow to opposite knee", "Controlled pace", "Full rotation"],
            "https://liftmanual.com/wp-content/uploads/2023/04/bicycle-crunch.jpg",
        ),
        exercise(
            "co8",
            "Dead Bug",
            MuscleGroup::Core,
            "Bodyweight",
            "Core control",
            &["Lower back flat", "Opposite arm/leg", "Controlled breathing"],
            "https://static.wixstatic.com/media/2edbed_1b72e8a640234a1c880144620557ecd6~mv2.jpg/v1/fill/w_980,h_551,al_c,q_85,usm_0.66_1.00_0.01,enc_avif,quality_auto/2edbed_1b72e8a640234a1c880144620557ecd6~mv2.jpg",
        ),
        exercise(
            "ca1",
            "Treadmill Running",
            MuscleGroup::Cardio,
            "Treadmill",
            "Classic cardio",
            &["Start slow", "Incline for intensity", "Proper form"],
            "https://runnerslab.com/wp-content/uploads/2022/08/how_to_run_on_a_treadmill.jpg",
        ),
        exercise(
            "ca2",
            "Cycling",
            MuscleGroup::Cardio,
            "Bike",
            "Low impact cardio",
            &["Adjust seat height", "Maintain cadence", "Use resistance"],
            "https://static.vecteezy.com/system/resources/previews/033/330/320/non_2x/cropped-image-of-young-man-cycling-on-exercise-bike-in-gym-woman-on-a-fitness-exercise-bike-indoors-top-section-cropped-ai-generated-free-photo.jpg",
        ),
        exercise(
            "ca3",
            "Rowing Machine",
            MuscleGroup::Cardio,
            "Rower",
            "Full body cardio",
            &["Legs first", "Then lean back", "Arms last"],
            "https://cdn.webshopapp.com/shops/281654/files/284691729/rowing-machine-fitrow-50.jpg",
        ),
        exercise(
            "ca4",
            "Jump Rope",
            MuscleGroup::Cardio,
            "Jump Rope",
            "High intensity",
            &["Stay on toes", "Wrists do the work", "Keep jumps small"],
            "https://prod-academy-wp-content-uploads.s3.amazonaws.com/2016/07/jumpropechoice.jpg",
        ),
        exercise(
            "ca5",
            "Stair Climber",
            MuscleGroup::Cardio,
            "Machine",
            "Leg-focused cardio",
            &["Don't lean on rails", "Full steps", "Steady pace"],
            "https://hips.hearstapps.com/vader-prod.s3.amazonaws.com/1608150122-og_img_fb-artis_climb.jpg?crop=0.523xw:1xh;center,top&resize=980:*",
        ),
        exercise(
            "ca6",
            "Battle Ropes",
            MuscleGroup::Cardio,
            "Battle Ropes",
            "HIIT cardio",
            &["Use full body", "Create big waves", "Stay in athletic stance"],
            "https://hips.hearstapps.com/hmg-prod/images/gettyimages-657495548-1527710829.jpg",
        ),
        exercise(
            "ca7",
            "Burpees",
            MuscleGroup::Cardio,
            "Bodyweight",
            "Full body HIIT",
            &["Explosive jump", "Chest to floor", "Fast pace"],
            "https://th.bing.com/th/id/R.8a4e5babe2b5d3384fa265aff599f224?rik=7u2uxYuuvtbrqw&riu=http%3a%2f%2fhiitacademy.com%2fwp-content%2fuploads%2f2015%2f02%2fburpees.jpg&ehk=aCrs9y7%2f0lrmsN%2bXff1mxbuJc6SPnccrQ4C8BLum5g0%3d&risl=&pid=ImgRaw&r=0",
        ),
        exercise(
            "ca8",
            "Box Jumps",
            MuscleGroup::Cardio,
            "Plyo Box",
            "Explosive power",
            &["Land softly", "Step down", "Use arms for momentum"],
            "https://www.shape.com/thmb/awFQ4our_lBcZyT8l-dD3_UqAZ8=/1500x0/filters:no_upscale():max_bytes(150000):strip_icc()/wide-box-jumps-baa219df5ca34d22b580f2d7fa07cb51.jpg",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_counts() {
        let count = |g| exercises_by_muscle_group(g).len();
        assert_eq!(count(MuscleGroup::Chest), 8);
        assert_eq!(count(MuscleGroup::Back), 8);
        assert_eq!(count(MuscleGroup::Shoulders), 8);
        assert_eq!(count(MuscleGroup::Arms), 10);
        assert_eq!(count(MuscleGroup::Legs), 10);
        assert_eq!(count(MuscleGroup::Core), 8);
        assert_eq!(count(MuscleGroup::Cardio), 8);
        assert_eq!(exercise_table().len(), 60);
    }

    #[test]
    fn test_filter_keeps_table_order() {
        let chest = exercises_by_muscle_group(MuscleGroup::Chest);
        assert_eq!(chest[0].id, "c1");
        assert_eq!(chest[0].name, "Barbell Bench Press");
        assert!(chest.iter().all(|e| e.muscle_group == MuscleGroup::Chest));
    }

    #[test]
    fn test_find_exercise() {
        let bench = find_exercise("c1").unwrap();
        assert_eq!(bench.equipment, "Barbell");
        assert_eq!(bench.tips.len(), 3);
        assert!(find_exercise("nope").is_none());
        assert_eq!(muscle_groups().len(), 7);
    }
}
