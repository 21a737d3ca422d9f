//! Account data for the Profile and Business screens.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub location: String,
    pub food_preferences: Vec<String>,
    pub image_url: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::seed()
    }
}

impl UserProfile {
    pub fn seed() -> Self {
        Self {
            name: "Joshua K".into(),
            location: "San Francisco, CA".into(),
            food_preferences: vec!["Bagels".into(), "Matcha".into()],
            image_url: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=400".into(),
        }
    }
}

/// One past event hosted by the business, newest first in [`BusinessStats`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastPopup {
    pub id: u32,
    pub date: String,
    pub location: String,
    pub attendees: u32,
}

/// A point of the attendance chart, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePoint {
    pub date: String,
    pub attendees: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessStats {
    pub name: String,
    pub total_attendees: u32,
    pub average_attendees: u32,
    pub previous_popups: Vec<PastPopup>,
    pub attendance: Vec<AttendancePoint>,
}

impl Default for BusinessStats {
    fn default() -> Self {
        Self::seed()
    }
}

impl BusinessStats {
    pub fn seed() -> Self {
        const PAST: [(u32, &str, &str, u32); 5] = [
            (1, "November 2, 2025", "Golden Gate Park, SF", 56),
            (2, "October 26, 2025", "Mission District, SF", 48),
            (3, "October 19, 2025", "Ferry Building, SF", 62),
            (4, "October 12, 2025", "Dolores Park, SF", 41),
            (5, "October 5, 2025", "Union Square, SF", 38),
        ];
        const CHART: [(&str, u32); 5] = [
            ("Oct 5", 38),
            ("Oct 12", 41),
            ("Oct 19", 62),
            ("Oct 26", 48),
            ("Nov 2", 56),
        ];

        Self {
            name: "Joshua's Coffee Corner".into(),
            // Lifetime figures include events older than the listed five.
            total_attendees: 342,
            average_attendees: 43,
            previous_popups: PAST
                .iter()
                .map(|&(id, date, location, attendees)| PastPopup {
                    id,
                    date: date.into(),
                    location: location.into(),
                    attendees,
                })
                .collect(),
            attendance: CHART
                .iter()
                .map(|&(date, attendees)| AttendancePoint {
                    date: date.into(),
                    attendees,
                })
                .collect(),
        }
    }
}
