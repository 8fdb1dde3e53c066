use indoc::indoc;

use crate::descriptor::EnumDescriptor;
use crate::diagnostics::SourceLocation;
use crate::exporter::ExportConfig;
use crate::mapping::TypeRegistry;
use crate::transform::Context;
use crate::transform::enums::transform_enum;

fn season() -> EnumDescriptor {
    EnumDescriptor {
        package: "foo.bar".into(),
        name: "Season".into(),
        entries: vec![
            "SPRING".into(),
            "SUMMER".into(),
            "AUTUMN".into(),
            "WINTER".into(),
        ],
        location: SourceLocation::new("src/Season.kt", 3),
    }
}

#[test]
fn generates_wrapper_accessors_and_lookup() {
    let registry = TypeRegistry::with_builtins();
    let ctx = Context {
        registry: &registry,
        config: ExportConfig::default(),
    };

    let file = transform_enum(&season(), &ctx);
    assert_eq!(
        file.render(),
        indoc! {r#"
            package foo.bar.js

            import kotlin.Array
            import kotlin.String
            import kotlin.js.JsExport
            import foo.bar.Season as CommonSeason

            @JsExport
            class Season internal constructor(internal val value: CommonSeason) {
                val name: String = value.name
            }

            @JsExport
            fun Season_values(): Array<Season> = arrayOf(Season_SPRING, Season_SUMMER, Season_AUTUMN, Season_WINTER)

            @JsExport
            fun Season_valueOf(name: String): Season? {
                if (name == Season_SPRING.name) return Season_SPRING
                if (name == Season_SUMMER.name) return Season_SUMMER
                if (name == Season_AUTUMN.name) return Season_AUTUMN
                if (name == Season_WINTER.name) return Season_WINTER
                return null
            }

            fun Season.importSeason(): CommonSeason = value

            fun CommonSeason.exportSeason(): Season = Season(this)

            @JsExport
            val Season_SPRING: Season = CommonSeason.SPRING.exportSeason()

            @JsExport
            val Season_SUMMER: Season = CommonSeason.SUMMER.exportSeason()

            @JsExport
            val Season_AUTUMN: Season = CommonSeason.AUTUMN.exportSeason()

            @JsExport
            val Season_WINTER: Season = CommonSeason.WINTER.exportSeason()
        "#}
    );
}

#[test]
fn accessor_order_follows_declaration_order() {
    let registry = TypeRegistry::with_builtins();
    let ctx = Context {
        registry: &registry,
        config: ExportConfig::default(),
    };

    let file = transform_enum(&season(), &ctx);
    let names: Vec<&str> = file.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Season_SPRING",
            "Season_SUMMER",
            "Season_AUTUMN",
            "Season_WINTER"
        ]
    );
}

#[test]
fn erased_package_flattens_the_facade() {
    let registry = TypeRegistry::with_builtins();
    let ctx = Context {
        registry: &registry,
        config: ExportConfig {
            erase_package: true,
        },
    };

    let file = transform_enum(&season(), &ctx);
    let rendered = file.render();
    assert_eq!(file.package, "");
    assert!(rendered.starts_with("import kotlin.Array\n"));
    assert!(rendered.contains("import foo.bar.Season as CommonSeason"));
}
