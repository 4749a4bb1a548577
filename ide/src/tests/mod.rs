mod completion_dsl;
mod test_completion_context;
