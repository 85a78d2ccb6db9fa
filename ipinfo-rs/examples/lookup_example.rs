use ipinfo_rs::IpInfo;

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let ipinfo = IpInfo::init(None);

    for ip in ["8.8.8.8", "1.1.1.1", "2001:4860:4860::8888"] {
        match ipinfo.lookup(ip).await {
            Ok(location) => println!("{ip}: {location}"),
            Err(e) => eprintln!("{ip}: {e}"),
        }
    }
}
