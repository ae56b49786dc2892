use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use ticket_stats::analyzers::analyzer::analyze;
use ticket_stats::config::RouteConfig;
use ticket_stats::error::{LoadCause, TicketError};
use ticket_stats::output::write_report;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tickets.json")
}

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(name)
}

fn render(config: &RouteConfig) -> Result<String, TicketError> {
    let report = analyze(config)?;
    let mut out = Vec::new();
    write_report(&mut out, &report).unwrap();
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_full_pipeline() {
    let config = RouteConfig::default().with_input(fixture());
    let text = render(&config).expect("Failed to build report");

    let expected = "Минимальное время полета (в минутах):\n\
                    BA: 485\n\
                    S7: 360\n\
                    SU: 360\n\
                    TK: 350\n\
                    \n\
                    Разница между средней ценой и медианой:\n\
                    BA: 0.00\n\
                    S7: 400.00\n\
                    SU: 0.00\n\
                    TK: 1400.00\n";
    assert_eq!(text, expected);
}

#[test]
fn test_full_pipeline_counts() {
    let config = RouteConfig::default().with_input(fixture());
    let report = analyze(&config).unwrap();

    assert_eq!(report.total_tickets, 10);
    assert_eq!(report.matched_tickets, 8);
    assert_eq!(report.price_spreads.iter().map(|p| p.tickets).sum::<usize>(), 8);
}

#[test]
fn test_rerun_is_identical() {
    let config = RouteConfig::default().with_input(fixture());
    assert_eq!(render(&config).unwrap(), render(&config).unwrap());
}

#[test]
fn test_other_route_from_same_file() {
    let config = RouteConfig::default()
        .with_input(fixture())
        .with_route("Уфа", "Ларнака");
    let text = render(&config).unwrap();

    assert!(text.contains("TK: 325\n"));
    assert!(text.contains("TK: 0.00\n"));
}

#[test]
fn test_no_matching_tickets_prints_headers_only() {
    let config = RouteConfig::default()
        .with_input(fixture())
        .with_route("Москва", "Сочи");
    let text = render(&config).unwrap();

    assert_eq!(
        text,
        "Минимальное время полета (в минутах):\n\nРазница между средней ценой и медианой:\n"
    );
}

#[test]
fn test_even_bucket_median() {
    let path = temp_path("ticket_stats_it_even.json");
    let ticket = |price: i64| {
        format!(
            r#"{{"origin_name": "A", "destination_name": "B", "carrier": "XX",
                "departure_date": "01.01.24", "departure_time": "10:00",
                "arrival_date": "01.01.24", "arrival_time": "12:30", "price": {}}}"#,
            price
        )
    };
    let body = [100, 200, 300, 1000].map(ticket).join(",");
    fs::write(&path, format!(r#"{{"tickets": [{}]}}"#, body)).unwrap();

    let report = analyze(&RouteConfig::default().with_input(&path).with_route("A", "B")).unwrap();
    let prices = &report.price_spreads[0];
    assert_eq!(prices.median, 250.0);
    assert_eq!(prices.mean, 400.0);
    assert_eq!(prices.spread, 150.0);
    assert_eq!(report.min_durations[0].min_minutes, 150);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_tickets_key_is_load_error() {
    let path = temp_path("ticket_stats_it_missing_key.json");
    fs::write(&path, r#"{"flights": []}"#).unwrap();

    let result = render(&RouteConfig::default().with_input(&path));
    match result {
        Err(TicketError::DataLoad { path: p, cause }) => {
            assert_eq!(p, path);
            assert!(matches!(cause, LoadCause::MissingTickets));
        }
        other => panic!("expected DataLoad, got {:?}", other),
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_bad_date_on_route_is_fatal() {
    let path = temp_path("ticket_stats_it_bad_date.json");
    fs::write(
        &path,
        r#"{"tickets": [{"origin_name": "A", "destination_name": "B", "carrier": "XX",
            "departure_date": "1/1/2024", "departure_time": "10:00",
            "arrival_date": "01.01.24", "arrival_time": "12:30", "price": 1}]}"#,
    )
    .unwrap();

    let result = render(&RouteConfig::default().with_input(&path).with_route("A", "B"));
    match result {
        Err(TicketError::DateParse { value, .. }) => assert_eq!(value, "1/1/2024 10:00"),
        other => panic!("expected DateParse, got {:?}", other),
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_malformed_off_route_record_does_not_stop_report() {
    let path = temp_path("ticket_stats_it_off_route_malformed.json");
    fs::write(
        &path,
        r#"{"tickets": [
            {"origin_name": "A", "destination_name": "B", "carrier": "XX",
             "departure_date": "01.01.24", "departure_time": "10:00",
             "arrival_date": "01.01.24", "arrival_time": "12:30", "price": 500},
            {"origin_name": "C", "destination_name": "D", "carrier": "YY", "price": "n/a"}
        ]}"#,
    )
    .unwrap();

    let text = render(&RouteConfig::default().with_input(&path).with_route("A", "B")).unwrap();
    assert!(text.contains("XX: 150\n"));
    assert!(text.contains("XX: 0.00\n"));
    assert!(!text.contains("YY"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_malformed_on_route_record_names_index() {
    let path = temp_path("ticket_stats_it_on_route_malformed.json");
    fs::write(
        &path,
        r#"{"tickets": [
            {"origin_name": "C", "destination_name": "D"},
            {"origin_name": "A", "destination_name": "B", "carrier": "XX", "price": "n/a"}
        ]}"#,
    )
    .unwrap();

    let err = render(&RouteConfig::default().with_input(&path).with_route("A", "B")).unwrap_err();
    match &err {
        TicketError::DataLoad { cause, .. } => {
            assert!(matches!(cause, LoadCause::InvalidTicket { index: 1, .. }));
            assert!(cause.to_string().starts_with("InvalidTicket at index 1:"));
        }
        other => panic!("expected DataLoad, got {:?}", other),
    }

    fs::remove_file(&path).unwrap();
}
