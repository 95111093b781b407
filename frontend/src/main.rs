fn main() {
    #[cfg(target_arch = "wasm32")]
    leave_manager_frontend::run();
}
