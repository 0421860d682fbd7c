//! Narrative message catalog
//!
//! Short per-kind lines for hazard hits, the longer rejection e-mail bodies
//! revealed character by character, and the progression lines.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::ObstacleKind;

/// Shown when the player reaches the real goal
pub const GOAL_REACHED: &str = "Interview scheduled. Climbing higher.";
/// Shown when the player touches a decoy goal
pub const DECOY_GOAL: &str = "Position no longer available.";
/// Terminal line once the level index exceeds the last level
pub const TOWER_CONQUERED: &str = "Corporate empire conquered. Ultimate success achieved!";

/// Longer bodies delivered by email/spam missiles via the typing reveal
pub const REJECTION_EMAILS: [&str; 5] = [
    "Thank you for your interest. After careful consideration, we have decided to move forward with other candidates.",
    "We appreciate your application but have selected someone whose experience better aligns with our needs.",
    "While your qualifications are impressive, we found a candidate who is a better fit for this role.",
    "Position has been filled. We will keep your resume on file for future opportunities.",
    "We have chosen to proceed with candidates whose skills more closely match our requirements.",
];

pub fn random_rejection_email(rng: &mut Pcg32) -> &'static str {
    REJECTION_EMAILS[rng.random_range(0..REJECTION_EMAILS.len())]
}

/// Short hit line for a hazard kind
pub fn hit_message(kind: ObstacleKind) -> &'static str {
    use ObstacleKind::*;
    match kind {
        Rejection => "Application rejected. Requirements changed.",
        Deadline => "Deadline passed. Position filled.",
        Requirement => "Missing qualification discovered.",
        Email => "Rejection email received.",
        Spam => "Spam filter caught your application.",
        Interview => "Interview cancelled last minute.",
        Reference => "Reference check failed.",
        Teleport => "Teleported to random location.",
        Laser => "Laser security system activated.",
        Bomb => "Explosive deadline detonated.",
        Quicksand => "Stuck in bureaucratic quicksand.",
        Lightning => "Struck by corporate lightning.",
        Portal => "Sucked into portal vortex.",
        GravityWell => "Caught in gravity well.",
        Virus => "System infected with virus.",
        Spy => "Corporate spy detected you.",
        DataBreach => "Data breach compromised you.",
        Corruption => "System corruption detected.",
        Boss => "Final boss encountered.",
    }
}
