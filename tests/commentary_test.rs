use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;

use tui_snake::commentary::{
    parse_commentary, parse_debrief, CommentaryClient, CommentaryConfig, CommentaryError,
    CommentaryProvider, ProviderKind, Request, ScriptedProvider,
};
use tui_snake::engine::{CommentaryReply, Session, SessionConfig, Silent};
use tui_snake::types::{GameAction, GameEvent, GameStats, GameStatus, Mood};

async fn next_reply(client: &mut CommentaryClient) -> CommentaryReply {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(reply) = client.try_recv() {
            return reply;
        }
        assert!(tokio::time::Instant::now() < deadline, "no reply in time");
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn client_on_shared_runtime_delivers_lines_and_reports() {
    let mut client = CommentaryClient::with_handle(Handle::current(), Arc::new(ScriptedProvider));

    client.request(GameEvent::Start, 0);
    match next_reply(&mut client).await {
        CommentaryReply::Line(line) => assert_eq!(line.mood, Mood::Neutral),
        other => panic!("unexpected reply: {other:?}"),
    }

    client.request_report(GameStats {
        run: 2,
        score: 40,
        moves: 400,
        duration_secs: 90,
    });
    match next_reply(&mut client).await {
        CommentaryReply::Debrief { run, report } => {
            assert_eq!(run, 2);
            assert_eq!(report.score_rating, "Chrome Viper");
            assert_eq!(report.tips.len(), 3);
        }
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[tokio::test]
async fn scripted_provider_is_deterministic() {
    let p = ScriptedProvider;
    let a = p.commentary(10, GameEvent::Eat).await.unwrap();
    let b = p.commentary(10, GameEvent::Eat).await.unwrap();
    assert_eq!(a, b);
}

#[test]
fn replies_parse_with_lenient_moods() {
    let line = parse_commentary(r#" {"text":"Sharp turn!","mood":"EXCITED"} "#).unwrap();
    assert_eq!(line.mood, Mood::Excited);

    assert!(matches!(
        parse_commentary(r#"{"mood":"neutral"}"#),
        Err(CommentaryError::Empty)
    ));
    assert!(matches!(
        parse_debrief("{"),
        Err(CommentaryError::Malformed(_))
    ));
}

#[test]
fn blank_command_falls_back_to_scripted() {
    let cfg = CommentaryConfig {
        provider: ProviderKind::Command("   ".into()),
        ..CommentaryConfig::default()
    };
    let mut client = CommentaryClient::from_config(&cfg).unwrap().unwrap();
    client.request(GameEvent::Die, 2);
    match client.recv_timeout(Duration::from_secs(5)) {
        Some(CommentaryReply::Line(line)) => assert_eq!(line.mood, Mood::Sarcastic),
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[test]
fn session_shows_line_from_background_client() {
    let client = CommentaryClient::new(Arc::new(ScriptedProvider)).unwrap();
    let mut session = Session::new(&SessionConfig::default(), client, Silent);
    let t0 = Instant::now();
    session.handle_action(GameAction::Start, t0);
    session.handle_action(GameAction::Pause, t0);
    assert_eq!(session.status(), GameStatus::Paused);

    let deadline = Instant::now() + Duration::from_secs(5);
    while session.commentary().is_none() && Instant::now() < deadline {
        session.advance(Instant::now());
        std::thread::sleep(Duration::from_millis(5));
    }
    let line = session.commentary().expect("commentary should arrive");
    assert_eq!(line.mood, Mood::Neutral);
}

#[test]
fn debrief_request_wire_shape() {
    let value = serde_json::to_value(Request::debrief(GameStats {
        run: 1,
        score: 12,
        moves: 140,
        duration_secs: 38,
    }))
    .unwrap();
    assert_eq!(
        value,
        serde_json::json!({"kind": "debrief", "score": 12, "moves": 140, "duration_secs": 38})
    );
}
