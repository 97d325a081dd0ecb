fn main() {
    processlang::app::cli::run();
}
