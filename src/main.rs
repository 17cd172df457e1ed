use elastic_net_batch::{BatchDriver, RunConfig, RunOutput};

fn main() -> elastic_net_batch::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output = BatchDriver::new(RunConfig::default()).run()?;

    println!(
        "\nElastic Net prediction results: (first 10 rows):\n{}",
        RunOutput::format_head(&output.prediction, 10)
    );
    println!(
        "\nGround truth (first 10 rows):\n{}",
        RunOutput::format_head(&output.ground_truth, 10)
    );
    log::info!("\n{}", output.report);
    println!("All looks good!");
    Ok(())
}
