fn main() {
    protomig::cli::run();
}
