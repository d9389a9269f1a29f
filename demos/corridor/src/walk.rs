//! A deliberately small locomotion model for the demo.
//!
//! Each agent relaxes towards a desired velocity pointing at the door, is
//! pushed apart from overlapping neighbours, and has its total force
//! clamped.  Impatient agents want to walk faster.  Anyone within
//! `goal_radius` of the door leaves the domain.

use serde::Deserialize;

use eg_agent::{AgentStore, PopulationView};
use eg_core::vec2::{cross, dot, force_limit, normalize, rotate270, rotate90};
use eg_core::{AgentId, ExitDoor, Vec2};
use eg_game::Strategy;
use eg_sim::Locomotion;

#[derive(Clone, Debug, Deserialize)]
pub struct WalkParams {
    pub patient_speed:   f64,
    pub impatient_speed: f64,
    pub relaxation_time: f64,
    pub max_force:       f64,
    pub body_radius:     f64,
    pub repulsion:       f64,
    pub goal_radius:     f64,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            patient_speed:   1.0,
            impatient_speed: 1.6,
            relaxation_time: 0.5,
            max_force:       8.0,
            body_radius:     0.25,
            repulsion:       6.0,
            goal_radius:     0.3,
        }
    }
}

pub struct ExitWalk {
    pub exit:   ExitDoor,
    pub params: WalkParams,
}

impl ExitWalk {
    fn force_on(&self, agents: &AgentStore, id: AgentId, strategy: Strategy) -> Vec2 {
        let p = &self.params;
        let i = id.index();
        let pos = agents.position[i];
        let heading = normalize(self.exit.reference_point() - pos);

        let speed = match strategy {
            Strategy::Impatient => p.impatient_speed,
            Strategy::Patient => p.patient_speed,
        };
        let mut force = (heading * speed - agents.velocity[i]) / p.relaxation_time;

        let contact = 2.0 * p.body_radius;
        for &j in agents.neighbors(id) {
            if !j.is_valid() {
                continue;
            }
            let d = pos - agents.position[j.index()];
            let dist2 = d.length_squared();
            if dist2 == 0.0 || dist2 >= contact * contact {
                continue;
            }
            let dist = dist2.sqrt();
            let n = normalize(d);
            force += n * (p.repulsion * (contact - dist));
            // Impatient agents slip sideways around the one in front of
            // them, towards whichever side the neighbour is not on.
            if strategy == Strategy::Impatient && dot(n, heading) < 0.0 {
                let side = if cross(heading, n) > 0.0 { rotate90(heading) } else { rotate270(heading) };
                force += side * (0.5 * p.repulsion * (contact - dist));
            }
        }

        force_limit(&mut force, p.max_force);
        force
    }
}

impl Locomotion<Strategy> for ExitWalk {
    fn advance(&mut self, agents: &mut AgentStore, strategies: &[Strategy], dt: f64) {
        let door = self.exit.reference_point();
        for id in agents.indices() {
            let i = id.index();
            if agents.position[i].distance(door) <= self.params.goal_radius {
                agents.mark_at_goal(id);
                continue;
            }
            let force = self.force_on(agents, id, strategies[i]);
            agents.velocity[i] += force * dt;
            let v = agents.velocity[i];
            agents.position[i] += v * dt;
        }
    }
}
