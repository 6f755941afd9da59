//! Demo catalog loaded into a fresh library.

use chrono::{DateTime, TimeZone, Utc};
use shaper_model::{Author, AuthorID, Course, CourseID};
use uuid::Uuid;

fn born(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn author(
    id: u128,
    first_name: &str,
    last_name: &str,
    date_of_birth: DateTime<Utc>,
    main_category: &str,
    courses: &[(u128, &str, Option<&str>)],
) -> Author {
    let author_id = AuthorID(Uuid::from_u128(id));
    Author {
        id: author_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth,
        main_category: main_category.to_string(),
        courses: courses
            .iter()
            .map(|(course_id, title, description)| Course {
                id: CourseID(Uuid::from_u128(*course_id)),
                author_id,
                title: title.to_string(),
                description: description.map(str::to_string),
            })
            .collect(),
    }
}

/// Authors and courses available before any writes.
pub fn demo_authors() -> Vec<Author> {
    vec![
        author(
            0xd28888e9_2ba9_473a_a40f_e38cb54f9b35,
            "Anne",
            "Bonny",
            born(1697, 3, 8),
            "Navigation",
            &[(
                0x5b1c2b4d_48c7_402a_80c3_cc796ad49c6b,
                "Reading the Stars Without a Sextant",
                Some("Dead reckoning and celestial navigation for small crews."),
            )],
        ),
        author(
            0xda2fd609_d754_4feb_8acd_c4f9ff13ba96,
            "Edward",
            "Teach",
            born(1680, 1, 1),
            "Intimidation",
            &[
                (
                    0xd8663e5e_7494_4f81_8739_6e0de1bea7ee,
                    "Lighting Your Beard for Effect",
                    Some("Smoke, fuses and the art of the first impression."),
                ),
                (
                    0xd173e20d_159e_4127_9ce9_b0ac2564ad97,
                    "Blockading a Harbour",
                    None,
                ),
            ],
        ),
        author(
            0x2902b665_1190_4c70_9915_b9c2d7680450,
            "Mary",
            "Read",
            born(1685, 6, 15),
            "Swordplay",
            &[(
                0x40ff5488_fdab_45b5_bc3a_14302d59869a,
                "Cutlass Basics",
                Some("Footwork, guards and keeping your grip on a wet deck."),
            )],
        ),
        author(
            0x102b566b_ba1f_404c_b2df_e2cde39ade09,
            "Henry",
            "Morgan",
            born(1635, 1, 24),
            "Navigation",
            &[],
        ),
        author(
            0x5b3621c0_7b12_4e80_9c8b_3398cba7ee05,
            "Grace",
            "O'Malley",
            born(1530, 1, 1),
            "Ships",
            &[(
                0x85a9e2d0_3c1f_4c2a_9b6c_6f1e5a0d7b11,
                "Galleys of the West Coast",
                Some("Building and crewing oared ships for rough water."),
            )],
        ),
        author(
            0x2aadd2df_7caf_45ab_9355_7f6332985a87,
            "William",
            "Kidd",
            born(1655, 1, 22),
            "Navigation",
            &[],
        ),
        author(
            0x2ee49fe3_edf2_4f91_8409_3eb25ce6ca51,
            "Jack",
            "Rackham",
            born(1682, 12, 26),
            "Rum",
            &[(
                0x6e3c1f8a_4d2b_4a7e_8f1c_9b0d2e5a7c33,
                "Provisioning a Long Voyage",
                None,
            )],
        ),
        author(
            0x71838f8b_6ab3_4539_9b8a_77a5b3d2a1c9,
            "Bartholomew",
            "Roberts",
            born(1682, 5, 17),
            "Singing",
            &[],
        ),
    ]
}
