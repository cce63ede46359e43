pub mod prompts;
pub mod render;

pub use prompts::{
    closest_match, collect_profile, prompt_health_status, prompt_life_stage, prompt_nutrients,
    prompt_percentage, prompt_species, prompt_yes_no, selector_hint,
};
pub use render::{display_batch_summary, display_result, display_standards};
