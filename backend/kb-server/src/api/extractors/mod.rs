mod api_json;
mod api_query;
mod user_id;

pub use api_json::ApiJson;
pub use api_query::ApiQuery;
pub use user_id::UserId;
