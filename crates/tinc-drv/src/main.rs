fn main() {
    if let Err(e) = tinc_drv::run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
