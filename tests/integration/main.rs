
mod create;
mod failures;
