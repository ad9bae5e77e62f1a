//! Projectile integration system.
//!
//! Updates each shell's position from its velocity: position += velocity.

use ironclash_core::components::Projectile;

/// Advance every projectile by exactly one step of its velocity.
pub fn run(projectiles: &mut [Projectile]) {
    for shell in projectiles {
        shell.position += shell.velocity;
    }
}
