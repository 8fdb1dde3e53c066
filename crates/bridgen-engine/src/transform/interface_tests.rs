use bridgen_core::{TypeShape, kotlin};
use indoc::indoc;

use crate::descriptor::{
    FunctionDescriptor, InterfaceDescriptor, ParameterDescriptor, PropertyDescriptor,
    SuperDescriptor,
};
use crate::diagnostics::SourceLocation;
use crate::exporter::ExportConfig;
use crate::mapping::TypeRegistry;
use crate::transform::Context;
use crate::transform::interface::transform_interface;

fn player() -> InterfaceDescriptor {
    InterfaceDescriptor {
        package: "api".into(),
        name: "Player".into(),
        type_parameters: Vec::new(),
        export_name: None,
        applied_arguments: Vec::new(),
        supertypes: Vec::new(),
        properties: vec![PropertyDescriptor {
            name: "volume".into(),
            ty: kotlin::long(),
            mutable: true,
            is_override: false,
        }],
        functions: vec![FunctionDescriptor {
            name: "play".into(),
            returns: kotlin::boolean(),
            parameters: vec![ParameterDescriptor {
                name: "track".into(),
                ty: kotlin::string(),
            }],
            is_override: false,
        }],
        location: SourceLocation::new("src/Player.kt", 1),
    }
}

#[test]
fn generates_facade_and_both_adapters() {
    let registry = TypeRegistry::with_builtins();
    let ctx = Context {
        registry: &registry,
        config: ExportConfig::default(),
    };

    let file = transform_interface(&player(), &ctx);
    assert_eq!(
        file.render(),
        indoc! {r#"
            package api.js

            import kotlin.Boolean
            import kotlin.Double
            import kotlin.Long
            import kotlin.String
            import kotlin.js.JsExport
            import api.Player as CommonPlayer

            @JsExport
            interface Player {
                var volume: Double

                fun play(track: String): Boolean
            }

            internal class ImportedPlayer(internal val exported: Player) : CommonPlayer {
                override var volume: Long
                    get() = exported.volume.toLong()
                    set(value) { exported.volume = value.toDouble() }

                override fun play(track: String): Boolean = exported.play(track)
            }

            internal class ExportedPlayer(internal val common: CommonPlayer) : Player {
                override var volume: Double
                    get() = common.volume.toDouble()
                    set(value) { common.volume = value.toLong() }

                override fun play(track: String): Boolean = common.play(track)
            }

            fun Player.importPlayer(): CommonPlayer = (this as? ExportedPlayer)?.common ?: ImportedPlayer(this)

            fun CommonPlayer.exportPlayer(): Player = (this as? ImportedPlayer)?.exported ?: ExportedPlayer(this)
        "#}
    );
}

#[test]
fn extension_is_restricted_to_facade_supertypes() {
    let registry = TypeRegistry::with_builtins();
    let ctx = Context {
        registry: &registry,
        config: ExportConfig::default(),
    };

    let mut descriptor = player();
    descriptor.supertypes = vec![SuperDescriptor {
        ty: TypeShape::simple("api", "Playable"),
        parameters: None,
    }];

    let file = transform_interface(&descriptor, &ctx);
    let rendered = file.render();
    assert!(rendered.contains("interface Player : Playable {"));
    // The adapters implement the native and facade sides respectively.
    assert!(rendered.contains("internal class ImportedPlayer(internal val exported: Player) : CommonPlayer {"));
    assert!(rendered.contains("internal class ExportedPlayer(internal val common: CommonPlayer) : Player {"));
}

#[test]
fn callback_members_convert_through_lambdas() {
    let registry = TypeRegistry::with_builtins();
    let ctx = Context {
        registry: &registry,
        config: ExportConfig::default(),
    };

    let descriptor = InterfaceDescriptor {
        package: "api".into(),
        name: "Ticker".into(),
        type_parameters: Vec::new(),
        export_name: None,
        applied_arguments: Vec::new(),
        supertypes: Vec::new(),
        properties: vec![PropertyDescriptor {
            name: "onTick".into(),
            ty: kotlin::function(vec![kotlin::long()], kotlin::unit()),
            mutable: false,
            is_override: false,
        }],
        functions: Vec::new(),
        location: SourceLocation::default(),
    };

    let file = transform_interface(&descriptor, &ctx);
    let rendered = file.render();
    // Facade surface: (Double) -> Unit.
    assert!(rendered.contains("val onTick: (Double) -> Unit"));
    // Exported adapter synthesizes the converting lambda.
    assert!(rendered.contains("get() = { a: kotlin.Double ->"));
    assert!(rendered.contains("common.onTick(a.toLong())"));
}
