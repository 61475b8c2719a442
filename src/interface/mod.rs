pub mod prompts;
pub mod render;

pub use prompts::{
    collect_user_inputs, prompt_activity_level, prompt_age, prompt_bmr, prompt_goal,
    prompt_height, prompt_menu, prompt_path, prompt_sex, prompt_weight, prompt_yes_no,
    suggest_key, MenuChoice,
};
pub use render::{display_activity_levels, display_goals, display_profile, format_profile_report};
