use dotenv::dotenv;
use el_archivador::archive::ArchiveJob;
use el_archivador::config::Config;

fn main() {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    match ArchiveJob::new(config).execute() {
        Ok(_) => (),
        Err(_) => {
            log::error!("Problem occurred");

            std::process::exit(1);
        }
    }
}
