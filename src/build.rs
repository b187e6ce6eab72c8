// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/calculator.ico");
        res.compile().unwrap();
    }
}
