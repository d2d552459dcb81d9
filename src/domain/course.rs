//! Static course tiles for the dashboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "\u{2197}",
            Trend::Down => "\u{2198}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    pub code: &'static str,
    pub title: &'static str,
    pub new_posts: u32,
    pub unanswered: u32,
    pub trend: Trend,
    pub footer: Option<&'static str>,
}

impl CourseCard {
    pub fn badge(&self) -> String {
        format!("{} {} New", self.trend.arrow(), self.new_posts)
    }

    pub fn unanswered_line(&self) -> String {
        format!("{} Unanswered {}", self.unanswered, self.trend.arrow())
    }
}

pub const GREETING_SUBLINE: &str = "Check out events happening on campus!";

pub fn course_cards() -> Vec<CourseCard> {
    vec![
        CourseCard {
            code: "COMP2123",
            title: "Data Structures and Algorithms",
            new_posts: 34,
            unanswered: 12,
            trend: Trend::Up,
            footer: Some("Click here to view more!"),
        },
        CourseCard {
            code: "COMP2017",
            title: "Systems Programming",
            new_posts: 27,
            unanswered: 10,
            trend: Trend::Down,
            footer: Some("Click here to view more!"),
        },
        CourseCard {
            code: "MATH2069",
            title: "Discrete Mathematics",
            new_posts: 2,
            unanswered: 1,
            trend: Trend::Up,
            footer: Some("Click here to view more."),
        },
        CourseCard {
            code: "ENGG3112",
            title: "Interdisciplinary Engineering",
            new_posts: 43,
            unanswered: 27,
            trend: Trend::Up,
            footer: Some("Click here to view more."),
        },
        CourseCard {
            code: "ISYS2110",
            title: "Web and Information Designs",
            new_posts: 10,
            unanswered: 3,
            trend: Trend::Up,
            footer: None,
        },
    ]
}

/// Time-of-day greeting, e.g. "Good Morning, Arjun.".
pub fn greeting(hour: u32, name: &str) -> String {
    let period = match hour {
        0..=11 => "Morning",
        12..=17 => "Afternoon",
        _ => "Evening",
    };
    format!("Good {period}, {name}.")
}
