mod models;
mod ordering;
