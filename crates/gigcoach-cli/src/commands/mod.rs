//! Command implementations

mod coach;
mod core;
mod records;

pub use coach::{cmd_chat, cmd_forecast_show, cmd_insights, cmd_score, cmd_tax};
pub use core::{cmd_init, cmd_serve, cmd_status, open_db};
pub use records::{
    cmd_earnings_add, cmd_earnings_list, cmd_expenses_add, cmd_expenses_list, cmd_forecast_record,
    cmd_goals_add, cmd_goals_delete, cmd_goals_list, cmd_goals_save, cmd_users_add, cmd_users_list,
};
