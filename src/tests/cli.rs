#[cfg(test)]
mod cli_tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};

    use crate::{
        cli::{Cli, EXIT_FAILED, EXIT_USAGE, USAGE, execute},
        tests::utils::*,
    };

    fn run(args: &[&str]) -> (u8, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let code = execute(&cli, &mut out);
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_no_paths_prints_usage() {
        let (code, out) = run(&["whiteout"]);
        assert_eq!(code, EXIT_USAGE);
        assert_ne!(code, 0);
        assert_eq!(out, format!("{USAGE}\n"));
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from(["whiteout", "-j", "--fail-fast", "a.png", "b.jpg"]).unwrap();
        assert!(cli.parallel);
        assert!(cli.fail_fast);
        assert_eq!(cli.paths.len(), 2);

        let config = cli.strip_config();
        assert_eq!(config.threshold, 240);
        assert!(!config.runs_parallel());
    }

    #[test]
    fn test_missing_file_exits_cleanly() {
        let dir = scratch_dir("cli_missing");
        let missing = dir.join("ghost.png");
        let (code, out) = run(&["whiteout", missing.to_str().unwrap()]);
        assert_eq!(code, 0);
        assert_eq!(out, format!("File not found: {}\n", missing.display()));
    }

    #[test]
    fn test_failures_set_exit_code() {
        let dir = scratch_dir("cli_failures");
        let broken = dir.join("broken.png");
        let good = dir.join("good.png");
        std::fs::write(&broken, b"nope").unwrap();
        RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(&good).unwrap();

        let (code, out) = run(&["whiteout", broken.to_str().unwrap(), good.to_str().unwrap()]);
        assert_eq!(code, EXIT_FAILED);
        assert!(out.ends_with(&format!("Saved to {}\n", good.display())));

        let (code, out) = run(&[
            "whiteout",
            "--fail-fast",
            broken.to_str().unwrap(),
            good.to_str().unwrap(),
        ]);
        assert_eq!(code, EXIT_FAILED);
        assert!(!out.contains("Saved to"));
    }

    #[test]
    fn test_success_exit_code() {
        let dir = scratch_dir("cli_success");
        let path = dir.join("ok.png");
        RgbImage::from_pixel(2, 2, Rgb([255, 255, 255])).save(&path).unwrap();

        let (code, out) = run(&["whiteout", "--parallel", path.to_str().unwrap()]);
        assert_eq!(code, 0);
        assert_eq!(
            out,
            format!("Processing {0}...\nSaved to {0}\n", path.display())
        );
    }
}
