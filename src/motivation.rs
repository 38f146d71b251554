//! Motivation
//!
//! Quote of the day and a time-of-day greeting for the dashboard header.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "The only bad workout is the one that didn't happen.",
        author: "Unknown",
    },
    Quote {
        text: "Your body can stand almost anything. It's your mind that you have to convince.",
        author: "Unknown",
    },
    Quote {
        text: "Success is what comes after you stop making excuses.",
        author: "Luis Galarza",
    },
    Quote {
        text: "The pain you feel today will be the strength you feel tomorrow.",
        author: "Arnold Schwarzenegger",
    },
    Quote {
        text: "Don't limit your challenges. Challenge your limits.",
        author: "Unknown",
    },
    Quote {
        text: "The difference between try and triumph is a little umph.",
        author: "Marvin Phillips",
    },
    Quote {
        text: "Fitness is not about being better than someone else. It's about being better than you used to be.",
        author: "Khloe Kardashian",
    },
    Quote {
        text: "Take care of your body. It's the only place you have to live.",
        author: "Jim Rohn",
    },
    Quote {
        text: "The only way to finish is to start.",
        author: "Unknown",
    },
    Quote {
        text: "Sweat is fat crying.",
        author: "Unknown",
    },
    Quote {
        text: "Push harder than yesterday if you want a different tomorrow.",
        author: "Unknown",
    },
    Quote {
        text: "Strength does not come from physical capacity. It comes from an indomitable will.",
        author: "Mahatma Gandhi",
    },
    Quote {
        text: "The body achieves what the mind believes.",
        author: "Napoleon Hill",
    },
    Quote {
        text: "You don't have to be extreme, just consistent.",
        author: "Unknown",
    },
    Quote {
        text: "Wake up with determination. Go to bed with satisfaction.",
        author: "Unknown",
    },];

/// The same quote all day, a different one the next
pub fn quote_for_day(date: NaiveDate) -> &'static Quote {
    let index = date.num_days_from_ce().rem_euclid(QUOTES.len() as i32) as usize;
    &QUOTES[index]
}

/// Greeting for an hour of the day (0-23)
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}
