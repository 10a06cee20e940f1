use ha_stats::error::AppResult;

fn main() -> AppResult<()> {
    ha_stats::entry::run()
}
