#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use fencer::io::svg::layout_to_svg;
    use fencer::io::{export, import};
    use fencer::placement::{Planner, segmenter};
    use fencer::util::SessionConfig;
    use fencer_cli::config::FencerCliConfig;
    use fencer_cli::io::output::FenceOutput;
    use fencer_cli::{io, replay_through_session};

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    #[test_case("../assets/triangle.json", 17; "triangle")]
    #[test_case("../assets/hillside.json", 21; "hillside")]
    #[test_case("../assets/open_path.json", 13; "open_path")]
    fn test_instance(instance_path: &str, expected_placements: usize) {
        init_logger();
        let config = FencerCliConfig::default();
        let ext_fence = io::read_fence(Path::new(instance_path)).unwrap();
        let instance = import::import_fence(&ext_fence).unwrap();

        let layout = Planner::new(config.planner)
            .plan_layout(&instance.polyline, &instance.element, instance.surface.as_ref())
            .unwrap();
        assert_eq!(layout.n_placements(), expected_placements);
        assert_eq!(layout.edges.len(), instance.polyline.n_edges());
        for p in &layout.placements {
            assert!(p.position.is_finite());
            assert!(p.orientation.tilt.abs() <= std::f64::consts::FRAC_PI_2);
        }

        let output = FenceOutput {
            fence: ext_fence,
            plan: export::export_plan(
                &layout,
                &instance.element,
                &config.planner.heading_reference,
            ),
            config,
            run_time_ms: 0,
        };
        let stem = Path::new(instance_path).file_stem().unwrap().to_str().unwrap();
        let folder = std::env::temp_dir().join("fencer-cli-tests");
        std::fs::create_dir_all(&folder).unwrap();

        let json_path = folder.join(format!("plan_{stem}.json"));
        io::write_json(&output, &json_path).unwrap();
        let written: FenceOutput =
            serde_json::from_reader(std::fs::File::open(&json_path).unwrap()).unwrap();
        assert_eq!(written.plan.placements.len(), expected_placements);

        let svg = layout_to_svg(
            &layout,
            &instance.polyline,
            &instance.element,
            &config.planner.heading_reference,
            config.svg_draw_options,
            &instance.name,
        );
        io::write_svg(&svg, &folder.join(format!("plan_{stem}.svg"))).unwrap();
    }

    #[test]
    fn replayed_edges_fit_whole_elements() {
        init_logger();
        let ext_fence = io::read_fence(Path::new("../assets/open_path.json")).unwrap();
        let instance = import::import_fence(&ext_fence).unwrap();
        let polyline = replay_through_session(&instance, SessionConfig::default()).unwrap();

        assert_eq!(polyline.n_points(), instance.polyline.n_points());
        assert!(!polyline.is_closed);
        for edge in polyline.edges() {
            assert!(approx_eq!(
                f64,
                segmenter::remainder(edge.length(), instance.element.length),
                0.0,
                epsilon = 1e-9
            ));
        }
    }

    #[test]
    fn missing_files_are_reported() {
        assert!(io::read_fence(Path::new("../assets/does_not_exist.json")).is_err());
    }
}
