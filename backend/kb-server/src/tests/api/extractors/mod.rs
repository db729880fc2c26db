mod user_id;
