use codec_shootout::{run, BenchConfig, Record};

fn main() -> anyhow::Result<()> {
    // init logger; report lines go out at info level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .try_init()?;

    let record = Record::sample();
    let config = BenchConfig::default();
    log::debug!("measuring {:?} with {:?}", record, config);

    run(&record, &config.codecs());

    Ok(())
}
