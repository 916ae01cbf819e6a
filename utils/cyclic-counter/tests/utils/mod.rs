pub fn init_logger() {
    let _ = env_logger::builder()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .format_source_path(true)
        .is_test(true)
        .try_init();
}
