// src/models/category.rs

//! Archive categories known to the search endpoint.
//!
//! The table is only shown to the operator. The `-cat` value is sent to the
//! server as typed and never checked against it.

/// A single archive category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
}

/// All categories, sorted by id.
pub const CATEGORIES: &[Category] = &[
    Category {
        id: 1,
        name: "Uncategorized",
    },
    Category {
        id: 9,
        name: "News",
    },
    Category {
        id: 10,
        name: "Sport",
    },
    Category {
        id: 14,
        name: "Opinion",
    },
    Category {
        id: 21,
        name: "Lifestyle",
    },
    Category {
        id: 26,
        name: "Kaila",
    },
    Category {
        id: 45,
        name: "Local Travel",
    },
    Category {
        id: 54,
        name: "Nai Lalakai",
    },
    Category {
        id: 55,
        name: "Shanti Dut",
    },
    Category {
        id: 36631,
        name: "People",
    },
    Category {
        id: 56765,
        name: "Today’s Main Story",
    },
    Category {
        id: 64517,
        name: "Dining Entertainment",
    },
    Category {
        id: 89320,
        name: "Classifieds",
    },
];

impl Category {
    /// Display line used in the usage printout.
    pub fn display_line(&self) -> String {
        format!("{} => {}", self.id, self.name)
    }
}
