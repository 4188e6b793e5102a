use figment::Jail;
use folio_config::{Accent, Background, FolioConfig};
use pretty_assertions::assert_eq;

#[test]
fn project_toml_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(
            ".folio/config.toml",
            r#"
            [site]
            home_title = "Handbook"
            show_topics = false

            [design]
            background = "dots"
            accent = "fuchsia"

            [toc]
            heading_depth = 4
            "#,
        )?;

        let config = FolioConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.site.home_title, "Handbook");
        assert!(!config.site.show_topics);
        assert_eq!(config.design.background, Background::Dots);
        assert_eq!(config.design.accent, Accent::Fuchsia);
        assert_eq!(config.toc.heading_depth, 4);
        assert_eq!(config.search.per_page, 6);
        Ok(())
    });
}

#[test]
fn unknown_accent_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(".folio/config.toml", "[design]\naccent = \"chartreuse\"\n")?;
        assert!(FolioConfig::load().is_err());
        Ok(())
    });
}

#[test]
fn out_of_range_depth_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(".folio/config.toml", "[toc]\nheading_depth = 9\n")?;
        let err = FolioConfig::load().unwrap_err();
        assert!(err.to_string().contains("toc.heading_depth"));
        Ok(())
    });
}

#[test]
fn load_from_reads_another_root() {
    Jail::expect_with(|jail| {
        jail.create_dir("site/.folio")?;
        jail.create_file("site/.folio/config.toml", "[server]\nbind = \"0.0.0.0:9000\"\n")?;
        let config = FolioConfig::load_from(&jail.directory().join("site"))
            .map_err(|e| e.to_string())?;
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        Ok(())
    });
}
