use competitor_lens::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
