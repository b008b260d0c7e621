fn main() {
    // Emits the ESP-IDF environment for cross builds; a no-op on host
    // targets where no esp-idf-sys build has run.
    embuild::espidf::sysenv::output();
}
