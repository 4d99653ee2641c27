use anyhow::Result;
use std::path::Path;

use travel_recs_service::RecommendationService;

pub(crate) fn run(data: &Path, destination: &str, people: &str) -> Result<()> {
    let service = RecommendationService::try_load(data)?;
    let rec = service.recommend(destination, people)?;
    println!("{}", serde_json::to_string_pretty(&rec)?);
    Ok(())
}

pub(crate) fn list_destinations(data: &Path) -> Result<()> {
    let service = RecommendationService::try_load(data)?;
    for name in service.destinations() {
        println!("{name}");
    }
    Ok(())
}
