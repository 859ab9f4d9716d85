use crate::components::Paddle;
use crate::config::Config;
use crate::resources::{Dir, InputQueue};
use hecs::World;

/// Apply every queued paddle command as one discrete step
///
/// Commands arrive from the host's key bindings between ticks; draining
/// them here keeps the loop the sole writer of paddle positions.
pub fn apply_commands(world: &mut World, queue: &mut InputQueue, config: &Config) {
    for command in queue.drain() {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side != command.side {
                continue;
            }
            match command.dir {
                Dir::Up => paddle.move_up(config),
                Dir::Down => paddle.move_down(config),
            }
        }
    }
}
