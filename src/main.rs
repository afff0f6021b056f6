fn main() {
    #[cfg(feature = "logger")]
    env_logger::init();

    optional::cli::cli();
}
