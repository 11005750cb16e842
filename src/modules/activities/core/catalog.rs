// Activities every process starts with. There is no persistence, so a restart
// returns the rosters to exactly this state.

use crate::modules::activities::core::activity::Activity;
use std::collections::BTreeMap;

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Tennis Team",
        "Practice tennis skills and compete in interschool matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        10,
        &["lucas@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Train with the school team and play in the regional league",
        "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
        15,
        &["james@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore painting, drawing and sculpture with guest artists",
        "Thursdays, 3:30 PM - 5:00 PM",
        18,
        &["isabella@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct and stage the school's seasonal productions",
        "Wednesdays, 3:30 PM - 5:30 PM",
        25,
        &["mia@mergington.edu", "ethan@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        16,
        &["noah@mergington.edu"],
    ),
    (
        "Debate Team",
        "Build argumentation skills and compete in debate tournaments",
        "Fridays, 4:00 PM - 5:30 PM",
        14,
        &["amelia@mergington.edu", "liam@mergington.edu"],
    ),
];

pub fn seed_activities() -> BTreeMap<String, Activity> {
    SEED.iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}
