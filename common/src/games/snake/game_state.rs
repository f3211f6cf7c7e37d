use crate::games::SessionRng;
use crate::log;

use super::snake::Snake;
use super::types::{DeathReason, Direction, FieldSize, GameStatus, Point};

/// Random attempts before falling back to an exhaustive scan of free
/// cells. The scan keeps placement uniform and guarantees termination on
/// a nearly full grid.
const FOOD_PLACEMENT_ATTEMPTS: usize = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    pub moved: bool,
    pub ate_food: bool,
    pub death: Option<DeathReason>,
}

impl TickOutcome {
    fn idle() -> Self {
        Self {
            moved: false,
            ate_food: false,
            death: None,
        }
    }

    fn died(reason: DeathReason) -> Self {
        Self {
            moved: false,
            ate_food: false,
            death: Some(reason),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub snake: Snake,
    pub food: Point,
    pub field_size: FieldSize,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub score: u32,
    pub elapsed_seconds: u64,
}

impl SnakeGameState {
    pub fn new(field_size: FieldSize, rng: &mut SessionRng) -> Result<Self, String> {
        let start_pos = Point::new(field_size.width / 2, field_size.height / 2);
        let snake = Snake::new(start_pos);
        let food = place_food(field_size, &snake, rng)?;

        Ok(Self {
            snake,
            food,
            field_size,
            status: GameStatus::NotStarted,
            death_reason: None,
            score: 0,
            elapsed_seconds: 0,
        })
    }

    /// Buffers a direction request. The first request of a session starts
    /// the game; afterwards the latest request wins, except that reversing
    /// into the current heading is dropped outright (it never clobbers a
    /// previously buffered valid request).
    pub fn request_direction(&mut self, direction: Direction) {
        match self.status {
            GameStatus::NotStarted => {
                self.snake.heading = Some(direction);
                self.status = GameStatus::Running;
            }
            GameStatus::Running | GameStatus::Paused => {
                if let Some(heading) = self.snake.heading
                    && heading.is_opposite(direction)
                {
                    return;
                }
                self.snake.pending_direction = Some(direction);
            }
            GameStatus::Over => {}
        }
    }

    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
        }
    }

    /// Counts one whole second of play time. The timer runs only while the
    /// game is running and the snake actually has a heading.
    pub fn advance_second(&mut self) -> bool {
        if self.status == GameStatus::Running && self.snake.heading.is_some() {
            self.elapsed_seconds += 1;
            return true;
        }
        false
    }

    /// One simulation step. Applies at most one buffered direction change,
    /// moves the head, resolves collisions and food. `Err` is reserved for
    /// the unreachable fully-occupied-grid condition during food placement.
    pub fn tick(&mut self, rng: &mut SessionRng) -> Result<TickOutcome, String> {
        if self.status != GameStatus::Running {
            return Ok(TickOutcome::idle());
        }

        if let Some(direction) = self.snake.pending_direction.take() {
            self.snake.heading = Some(direction);
        }
        let Some(direction) = self.snake.heading else {
            return Ok(TickOutcome::idle());
        };

        let next_head = match self.next_head_position(direction) {
            Ok(point) => point,
            Err(reason) => {
                self.die(reason);
                return Ok(TickOutcome::died(reason));
            }
        };

        if self.snake.occupies(next_head) {
            self.die(DeathReason::SelfCollision);
            return Ok(TickOutcome::died(DeathReason::SelfCollision));
        }

        self.snake.body.push_front(next_head);
        self.snake.body_set.insert(next_head);

        let ate_food = next_head == self.food;
        if ate_food {
            self.score += 1;
            log!(
                "[snake] ate food at ({}, {}), score {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.food = place_food(self.field_size, &self.snake, rng)?;
        } else {
            let tail = self
                .snake
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            self.snake.body_set.remove(&tail);
        }

        Ok(TickOutcome {
            moved: true,
            ate_food,
            death: None,
        })
    }

    fn next_head_position(&self, direction: Direction) -> Result<Point, DeathReason> {
        let head = self.snake.head();
        match direction {
            Direction::Up => {
                if head.y == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x, head.y - 1))
            }
            Direction::Down => {
                if head.y >= self.field_size.height - 1 {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x, head.y + 1))
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x - 1, head.y))
            }
            Direction::Right => {
                if head.x >= self.field_size.width - 1 {
                    return Err(DeathReason::WallCollision);
                }
                Ok(Point::new(head.x + 1, head.y))
            }
        }
    }

    fn die(&mut self, reason: DeathReason) {
        self.death_reason = Some(reason);
        self.status = GameStatus::Over;
        log!("[snake] died: {:?}", reason);
    }

    #[cfg(test)]
    pub fn for_test(
        field_size: FieldSize,
        cells: &[Point],
        heading: Direction,
        food: Point,
    ) -> Self {
        let mut snake = Snake::new(cells[0]);
        for &cell in &cells[1..] {
            snake.body.push_back(cell);
            snake.body_set.insert(cell);
        }
        snake.heading = Some(heading);

        Self {
            snake,
            food,
            field_size,
            status: GameStatus::Running,
            death_reason: None,
            score: 0,
            elapsed_seconds: 0,
        }
    }
}

fn place_food(field_size: FieldSize, snake: &Snake, rng: &mut SessionRng) -> Result<Point, String> {
    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let pos = Point::new(
            rng.random_range(0..field_size.width),
            rng.random_range(0..field_size.height),
        );
        if !snake.occupies(pos) {
            return Ok(pos);
        }
    }

    let mut free_cells = Vec::new();
    for y in 0..field_size.height {
        for x in 0..field_size.width {
            let pos = Point::new(x, y);
            if !snake.occupies(pos) {
                free_cells.push(pos);
            }
        }
    }

    if free_cells.is_empty() {
        return Err("Cannot place food: every cell is occupied by the snake".to_string());
    }
    Ok(free_cells[rng.random_range(0..free_cells.len())])
}
