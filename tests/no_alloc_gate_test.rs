use std::alloc::{GlobalAlloc, Layout, System};
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use dmqh::core::{Game, GameSnapshot};
use dmqh::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use dmqh::types::{Direction, GameAction};

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

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// All gates live in one test: the counter is process-global and tests in a
// binary run in parallel.
#[test]
fn engine_view_and_renderer_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut game = Game::with_seed(1);
    let mut snap = GameSnapshot::default();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    let mut renderer = TerminalRenderer::with_writer(io::sink());

    game.reset();
    view.render_into(&game.snapshot(), None, vp, &mut fb);
    renderer.draw_swap(&mut fb).unwrap();

    let allocs = with_alloc_counting(|| {
        for _ in 0..500 {
            for direction in Direction::ALL {
                let events = game.play(direction);
                let _ = game.legal_directions();
                game.snapshot_into(&mut snap);
                view.render_into(&snap, events.as_ref(), vp, &mut fb);
                renderer.draw_swap(&mut fb).unwrap();
            }
            if game.is_game_over() {
                let _ = game.apply_action(GameAction::Restart);
            }
        }
    });

    assert_eq!(allocs, 0);
}
