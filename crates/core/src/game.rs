//! The tick loop state machine and its boundary ports.
//!
//! One tick runs, in order: scroll + collision test, two RNG draws, corridor
//! generation onto the far row, player input, border redraw, publish. A
//! collision flips the round into the absorbing `Terminal` state: the flash
//! animation plays through the display and clock ports and every later tick
//! is a no-op, leaving the published frame frozen at its pre-collision
//! state.
//!
//! The hardware surfaces of the original (memory-mapped video, input lines,
//! the 500 Hz timer) are injected here as [`DisplayPort`], [`InputPort`],
//! and [`Clock`]; the core never touches I/O directly.

use tui_ravine_types::{
    Buttons, Cell, RoundState, WallPair, FLASH_CYCLES, FLASH_HALF_TICKS, WALL_SEED_X1,
    WALL_SEED_X2, Y_MAX, Y_MIN,
};

use crate::border::draw_border;
use crate::corridor::CorridorGenerator;
use crate::grid::Grid;
use crate::lfsr::Lfsr;
use crate::player::{handle_input, Player};
use crate::scroll::scroll_and_collide;

/// Where finished frames go. `publish` must present the whole grid
/// atomically; `set_flash` toggles the death-flash display attribute.
pub trait DisplayPort {
    fn publish(&mut self, grid: &Grid);
    fn set_flash(&mut self, on: bool);
}

/// Latest sampled directional input, polled once per tick.
pub trait InputPort {
    fn sample(&mut self) -> Buttons;
}

/// Blocking wait, used only by the flash animation. Only the tick count is
/// meaningful; the mechanism behind it is the caller's business.
pub trait Clock {
    fn wait(&mut self, ticks: u8);
}

/// One round of the game: grid, player, RNG, and the injected display and
/// clock collaborators.
pub struct Game<D: DisplayPort, C: Clock> {
    pub grid: Grid,
    pub player: Player,
    pub state: RoundState,
    rng: Lfsr,
    generator: CorridorGenerator,
    display: D,
    clock: C,
}

impl<D: DisplayPort, C: Clock> Game<D, C> {
    /// Build a round. The seed fixes the entire level layout; the generator
    /// carries the narrow-predicate choice.
    pub fn new(seed: u16, generator: CorridorGenerator, display: D, clock: C) -> Self {
        Self {
            grid: Grid::new(),
            player: Player::new(),
            state: RoundState::Running,
            rng: Lfsr::new(seed),
            generator,
            display,
            clock,
        }
    }

    /// Reset the grid and publish the opening frame: border, a full canyon
    /// walked down from the far row, and the ship at its spawn cell.
    pub fn start_round(&mut self) {
        self.grid.clear();
        self.state = RoundState::Running;
        draw_border(&mut self.grid);
        self.seed_walls();
        self.player = Player::new();
        self.player.spawn(&mut self.grid);
        self.display.publish(&self.grid);
    }

    /// Walk the corridor generator over every playfield row so the round
    /// opens with a complete canyon rather than an empty screen. The walk
    /// starts from the reference seed pair and consumes two draws per row
    /// from the same register the tick loop uses.
    fn seed_walls(&mut self) {
        let mut walls = WallPair::new(WALL_SEED_X1, WALL_SEED_X2);
        for y in (Y_MIN..=Y_MAX).rev() {
            walls = self
                .generator
                .next_row(walls, self.rng.next(), self.rng.next());
            self.grid.set(walls.x1, y, Cell::Wall);
            self.grid.set(walls.x2, y, Cell::Wall);
        }
    }

    /// Run one tick. Absorbing: once `Terminal`, every call returns
    /// `Terminal` without touching any state.
    pub fn tick(&mut self, input: &mut dyn InputPort) -> RoundState {
        if self.state == RoundState::Terminal {
            return RoundState::Terminal;
        }

        let outcome = scroll_and_collide(&mut self.grid, self.player);
        if outcome.collision {
            self.state = RoundState::Terminal;
            self.play_flash();
            return RoundState::Terminal;
        }

        // Two draws per tick, always in this order; the draws are coupled
        // through the shared register, which is what makes a seed replay
        // the exact same canyon.
        let draw1 = self.rng.next();
        let draw2 = self.rng.next();
        if let Some(prev) = outcome.top_row {
            let next = self.generator.next_row(prev, draw1, draw2);
            self.grid.set(next.x1, Y_MAX, Cell::Wall);
            self.grid.set(next.x2, Y_MAX, Cell::Wall);
        }

        let buttons = input.sample();
        handle_input(&mut self.grid, &mut self.player, buttons);

        draw_border(&mut self.grid);
        self.display.publish(&self.grid);
        RoundState::Running
    }

    /// Fixed-length death animation: toggle the flash attribute on and off
    /// `FLASH_CYCLES` times with a fixed wait per half-cycle.
    fn play_flash(&mut self) {
        for _ in 0..FLASH_CYCLES {
            self.display.set_flash(true);
            self.clock.wait(FLASH_HALF_TICKS);
            self.display.set_flash(false);
            self.clock.wait(FLASH_HALF_TICKS);
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// The display collaborator, for callers that need to drain its status.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// The clock collaborator.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Tear the game down, releasing the display for restore-on-exit.
    pub fn into_display(self) -> D {
        self.display
    }
}
