fn main() {
    mailsweep::cli::run();
}
