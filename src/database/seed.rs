use crate::models::Activity;

/// The Mergington High School catalogue the server starts with.
pub fn mergington_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Basketball",
            "Team basketball practice and friendly matches",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
        ),
        Activity::new(
            "Tennis Club",
            "Tennis training and tournaments",
            "Saturdays, 10:00 AM - 12:00 PM",
            10,
        ),
        Activity::new(
            "Drama Club",
            "Theater productions and acting workshops",
            "Wednesdays, 4:00 PM - 5:30 PM",
            25,
        ),
        Activity::new(
            "Digital Art",
            "Learn digital design, animation, and graphic art",
            "Thursdays, 3:30 PM - 5:00 PM",
            18,
        ),
        Activity::new(
            "Debate Team",
            "Competitive debate and public speaking",
            "Tuesdays, 4:00 PM - 5:30 PM",
            16,
        ),
        Activity::new(
            "Science Club",
            "Explore STEM topics through experiments and projects",
            "Fridays, 3:30 PM - 4:30 PM",
            20,
        ),
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
    ]
}
