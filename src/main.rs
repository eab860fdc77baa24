//! CSR bootstrap: panic hook, console logger, mount.

use feedback_client::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
