use tokio::sync::mpsc;

use super::ProgressSimulator;
use super::tick_increment;
use super::PROGRESS_DURATION_MS;
use super::PROGRESS_TICK_MS;
use crate::domain::models::Event;

#[test]
fn it_sizes_ticks_to_reach_the_target() {
    let ticks = PROGRESS_DURATION_MS / PROGRESS_TICK_MS;
    assert_eq!(tick_increment() * ticks as f64, 100.0);
}

#[tokio::test(start_paused = true)]
async fn it_ticks_for_the_target_duration_then_stops() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    ProgressSimulator::start(7, tx).await.unwrap();

    let mut ticks = 0;
    while let Ok(event) = rx.try_recv() {
        match event {
            Event::InstructionProgress { id } => {
                assert_eq!(id, 7);
                ticks += 1;
            }
            _ => panic!("unexpected event"),
        }
    }

    assert_eq!(ticks, PROGRESS_DURATION_MS / PROGRESS_TICK_MS);
}

#[tokio::test(start_paused = true)]
async fn it_stops_when_the_receiver_goes_away() {
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    drop(rx);

    // Must terminate instead of ticking into a closed channel forever.
    ProgressSimulator::start(0, tx).await.unwrap();
}
