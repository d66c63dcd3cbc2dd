use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::input::handle_key_event;
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Coordinate, Direction, INITIAL_SPEED_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

// Tests in this binary share the counter, so everything runs in one test.
fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Steer around a 5x5 square so the snake neither dies nor eats.
fn square_route(step: usize) -> Direction {
    match (step / 5) % 4 {
        0 => Direction::Right,
        1 => Direction::Down,
        2 => Direction::Left,
        _ => Direction::Up,
    }
}

#[test]
fn hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    gs.start(INITIAL_SPEED_MS);
    gs.set_food(Coordinate::new(24, 24));
    let _ = gs.take_events();

    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, vp, &mut fb);

    let key = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
    let _ = handle_key_event(key);

    let allocs = with_alloc_counting(|| {
        for step in 0..200 {
            gs.request_direction(square_route(step));
            let _ = gs.tick();
            let _ = gs.take_events();
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, vp, &mut fb);
            let _ = handle_key_event(key);
        }
    });

    assert_eq!(gs.moves(), 200);
    assert!(allocs == 0);
}
