mod board;
mod pagination;
mod priority;
mod task_query;
