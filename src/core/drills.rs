//! Read-only traversal drills over fixed film and flight records.

use crate::domain::model::{Airline, CastMember, Film, Flight, FlightLeg};
use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use chrono::NaiveTime;

const ASKED_CHARACTER: &str = "Ellen Brody";

pub fn jaws() -> Film {
    let cast = [
        ("Roy Scheider", "Chief Martin Brody"),
        ("Robert Shaw", "Quint"),
        ("Lorraine Gary", "Ellen Brody"),
    ];

    Film {
        title: "Jaws".to_string(),
        year: 1975,
        duration: 128,
        genres: vec!["drama".to_string(), "thriller".to_string()],
        cast: cast
            .iter()
            .map(|(actor, character)| CastMember {
                actor: actor.to_string(),
                character: character.to_string(),
            })
            .collect(),
    }
}

pub fn sample_flight() -> Flight {
    Flight {
        number: "117".to_string(),
        airline: Airline {
            name: "British Airways".to_string(),
            code: "BA".to_string(),
        },
        departure: FlightLeg {
            airport: "LHR".to_string(),
            city: "London".to_string(),
            time: NaiveTime::from_hms_opt(8, 25, 0).unwrap_or_default(),
        },
        arrival: FlightLeg {
            airport: "JFK".to_string(),
            city: "New York".to_string(),
            time: NaiveTime::from_hms_opt(16, 40, 0).unwrap_or_default(),
        },
    }
}

pub fn film_drill(film: &Film, current_year: i32) -> Vec<String> {
    let mut lines = vec![
        film.title.clone(),
        format!("The film {} was released in {}", film.title, film.year),
    ];

    lines.extend(film.genres.iter().cloned());

    lines.push(match film.actor_playing(ASKED_CHARACTER) {
        Some(actor) => actor.to_string(),
        None => format!("Nobody plays {}", ASKED_CHARACTER),
    });

    lines.push(format!(
        "{} is {} years old",
        film.title,
        film.age_in(current_year)
    ));

    lines.extend(
        film.cast
            .iter()
            .map(|member| format!("{} as {}", member.actor, member.character)),
    );

    lines
}

pub fn flight_drill(flight: &Flight) -> Vec<String> {
    let minutes = flight.duration().num_minutes();

    vec![
        format!(
            "{}{} operated by {}",
            flight.airline.code, flight.number, flight.airline.name
        ),
        format!(
            "Departs {} ({}) at {}",
            flight.departure.city,
            flight.departure.airport,
            flight.departure.time.format("%H:%M")
        ),
        format!(
            "Arrives {} ({}) at {}",
            flight.arrival.city,
            flight.arrival.airport,
            flight.arrival.time.format("%H:%M")
        ),
        format!("Flight time: {}h {:02}m", minutes / 60, minutes % 60),
    ]
}

pub fn run_drill(lines: &[String], sink: &mut dyn OutputSink) -> Result<()> {
    for line in lines {
        sink.write_record(line)?;
    }
    tracing::debug!("Drill wrote {} lines", lines.len());
    Ok(())
}
