use figment::Jail;
use folio_config::FolioConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(".folio/config.toml", "[search]\nper_page = 10\n")?;
        jail.set_env("FOLIO_SEARCH__PER_PAGE", "25");

        let config = FolioConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.search.per_page, 25);
        Ok(())
    });
}

#[test]
fn nested_env_keys_map_to_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("FOLIO_SITE__BASE_URL", "/handbook");
        jail.set_env("FOLIO_SIDEBAR__SHOW_ICONS", "false");

        let config = FolioConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.site.article_url("intro"), "/handbook/docs/intro");
        assert!(!config.sidebar.show_icons);
        Ok(())
    });
}
