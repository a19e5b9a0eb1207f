use anyhow::Result;
use cake_shop::core::drills::{film_drill, flight_drill, run_drill};
use cake_shop::domain::model::{Film, Flight};
use cake_shop::ConsoleSink;
use serde_json::json;

#[test]
fn test_film_drill_from_json_record() -> Result<()> {
    let film: Film = serde_json::from_value(json!({
        "title": "Alien",
        "year": 1979,
        "duration": 117,
        "genres": ["horror", "sci-fi"],
        "cast": [
            { "actor": "Sigourney Weaver", "character": "Ripley" },
            { "actor": "Tom Skerritt", "character": "Dallas" }
        ]
    }))?;

    let lines = film_drill(&film, 2029);

    assert_eq!(lines[1], "The film Alien was released in 1979");
    assert!(lines.contains(&"Nobody plays Ellen Brody".to_string()));
    assert!(lines.contains(&"Alien is 50 years old".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("Tom Skerritt as Dallas"));
    Ok(())
}

#[test]
fn test_film_drill_with_extreme_year() -> Result<()> {
    let film: Film = serde_json::from_value(json!({
        "title": "Old",
        "year": -2147483000,
        "duration": 1,
        "genres": [],
        "cast": []
    }))?;

    let lines = film_drill(&film, 2025);
    assert!(lines.contains(&"Old is 2147485025 years old".to_string()));
    Ok(())
}

#[test]
fn test_overnight_flight_from_json_record() -> Result<()> {
    let flight: Flight = serde_json::from_value(json!({
        "number": "2",
        "airline": { "name": "Qantas", "code": "QF" },
        "departure": { "airport": "SIN", "city": "Singapore", "time": "23:55:00" },
        "arrival": { "airport": "LHR", "city": "London", "time": "06:10:00" }
    }))?;

    let mut sink = ConsoleSink::new(Vec::new());
    run_drill(&flight_drill(&flight), &mut sink)?;

    let text = String::from_utf8(sink.into_inner())?;
    assert_eq!(
        text,
        "QF2 operated by Qantas\n\
         Departs Singapore (SIN) at 23:55\n\
         Arrives London (LHR) at 06:10\n\
         Flight time: 6h 15m\n"
    );
    Ok(())
}

#[test]
fn test_malformed_drill_data_is_rejected() {
    let result: std::result::Result<Flight, _> =
        serde_json::from_value(json!({ "number": "2", "airline": "Qantas" }));
    assert!(result.is_err());
}
