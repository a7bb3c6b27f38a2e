use web_sys::js_sys::Math;
use yew::prelude::*;

pub const PARTICLE_COUNT: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
}

impl Particle {
    /// Maps four uniform samples in `[0, 1)` onto a particle.
    pub fn from_samples([size, left, top, duration]: [f64; 4]) -> Self {
        Self {
            size_px: size * 4.0,
            left_pct: left * 100.0,
            top_pct: top * 100.0,
            duration_s: duration * 10.0 + 5.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "width: {:.2}px; height: {:.2}px; left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s;",
            self.size_px, self.size_px, self.left_pct, self.top_pct, self.duration_s
        )
    }
}

fn random_particles() -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| Particle::from_samples([Math::random(), Math::random(), Math::random(), Math::random()]))
        .collect()
}

/// Drifting dots behind the offer card. Positions are drawn once per mount.
#[function_component(Particles)]
pub fn particles() -> Html {
    let particles = use_state(random_particles);

    html! {
        <div class="particles" aria-hidden="true">
            { for particles.iter().map(|p| html! {
                <div class="particle" style={p.style()}></div>
            }) }
            <style>
                {r#"
                .particles {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                    pointer-events: none;
                }

                .particle {
                    position: absolute;
                    background: #fff;
                    border-radius: 9999px;
                    animation-name: particle-drift;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }

                @keyframes particle-drift {
                    0% { transform: translateY(0); opacity: 0; }
                    50% { transform: translateY(-100px); opacity: 1; }
                    100% { transform: translateY(0); opacity: 0; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_map_into_their_ranges() {
        let low = Particle::from_samples([0.0; 4]);
        assert_eq!(low.size_px, 0.0);
        assert_eq!(low.left_pct, 0.0);
        assert_eq!(low.duration_s, 5.0);

        let high = Particle::from_samples([0.999; 4]);
        assert!(high.size_px < 4.0);
        assert!(high.left_pct < 100.0 && high.top_pct < 100.0);
        assert!(high.duration_s < 15.0);
    }

    #[test]
    fn style_carries_every_dimension() {
        let particle = Particle::from_samples([0.5, 0.25, 0.75, 0.5]);
        assert_eq!(
            particle.style(),
            "width: 2.00px; height: 2.00px; left: 25.00%; top: 75.00%; animation-duration: 10.00s;"
        );
    }
}
