//! Module surface generation
//!
//! [`SurfaceGenerator`] walks the public types of one module, classifies each
//! by shape, selects the members that belong on the surface and renders them
//! through the [`SignatureFormatter`]. Types are emitted grouped by namespace,
//! followed by placeholder declarations for every foreign type the module
//! touched that has no placeholder yet.
//!
//! Generation never writes files. The finished [`ModuleSurface`] carries the
//! source text and the placeholders it declared; the caller decides whether
//! to commit them.

use crate::codegen::format::{declared_name, Site, SignatureFormatter};
use crate::codegen::placeholder::{placeholder_candidates, placeholder_declaration};
use crate::codegen::writer::CodeWriter;
use crate::error::{SurfaceError, SurfaceResult, TypeShapeProblem};
use crate::ir::{
    enum_underlying_keyword, strip_arity, MemberCategory, MemberDescriptor, MemberKind,
    MetadataSource, PlaceholderRegistry, TypeDescriptor, TypeIdentity, TypeKind, TypeRef,
    TypeShape,
};
use crate::validate::{validate_public_types, ValidationWarning};
use tracing::{debug, info};

/// Header written at the top of every generated source file
pub const DEFAULT_HEADER: &str = "// generated by extract-surface";

/// Compiler-generated instance field that backs an enum's value
const ENUM_VALUE_FIELD: &str = "value__";

/// Accessor and event-hook prefixes of special-name methods left off the surface
const HIDDEN_SPECIAL_PREFIXES: &[&str] = &["get_", "set_", "put_", "add_", "remove_"];

/// Prefix of special-name methods that are operator overloads
const OPERATOR_PREFIX: &str = "op_";

/// Generated surface of one module
#[derive(Debug, Clone)]
pub struct ModuleSurface {
    /// Module name
    pub module: String,
    /// Source text
    pub source: String,
    /// Number of public types emitted
    pub type_count: usize,
    /// Foreign types that received a placeholder, in emission order
    pub placeholders: Vec<TypeIdentity>,
    /// Validation warnings
    pub warnings: Vec<ValidationWarning>,
}

/// Summary text for a member, from the fixed documentation rules
pub fn document_member(declaring: &TypeDescriptor, member: &MemberDescriptor) -> Option<String> {
    let type_name = strip_arity(&declaring.name);

    match &member.kind {
        MemberKind::Constructor => {
            let kind_of_type = match declaring.kind() {
                TypeKind::Class => "class",
                _ => "structure",
            };
            Some(format!(
                "Initializes a new instance of the {} {}.",
                type_name, kind_of_type
            ))
        }
        MemberKind::Method { .. } if member.name == "Dispose" => Some(format!(
            "Releases all resources used by the {}.",
            type_name
        )),
        _ => None,
    }
}

/// Generator for one module's surface
pub struct SurfaceGenerator<'a, S: MetadataSource + ?Sized> {
    source: &'a S,
    registry: &'a PlaceholderRegistry,
    header: String,
}

impl<'a, S: MetadataSource + ?Sized> SurfaceGenerator<'a, S> {
    /// Create a generator; `registry` holds the placeholders earlier modules declared
    pub fn new(source: &'a S, registry: &'a PlaceholderRegistry) -> Self {
        Self {
            source,
            registry,
            header: DEFAULT_HEADER.to_string(),
        }
    }

    /// Set the header line
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Generate the module surface
    pub fn generate(&self) -> SurfaceResult<ModuleSurface> {
        let module = self.source.module_name().to_string();
        let mut emitter = Emitter::new();

        emitter.writer.write_line(&self.header);
        emitter.writer.write_separator();

        let types = self.source.public_types();
        let warnings = validate_public_types(&types);
        let type_count = types.len();

        emitter.write_by_namespace(
            types,
            |ty| (ty.namespace.as_str(), ty.name.as_str()),
            |emitter, ty| emitter.write_type(ty),
        )?;

        let candidates =
            placeholder_candidates(emitter.formatter.seen(), self.registry, self.source);
        let placeholders = emitter.write_by_namespace(
            candidates,
            |identity| (identity.namespace.as_str(), identity.name.as_str()),
            |emitter, identity| {
                debug!(placeholder = %identity, module = %identity.module, "surface.placeholder");
                emitter.writer.write_line(placeholder_declaration(identity));
                Ok(())
            },
        )?;

        info!(
            module = %module,
            types = type_count,
            placeholders = placeholders.len(),
            "surface.module"
        );

        Ok(ModuleSurface {
            module,
            source: emitter.writer.into_string(),
            type_count,
            placeholders,
            warnings,
        })
    }
}

/// Writer plus formatter, so emission code can use both at once
struct Emitter {
    writer: CodeWriter,
    formatter: SignatureFormatter,
}

impl Emitter {
    fn new() -> Self {
        Self {
            writer: CodeWriter::new(),
            formatter: SignatureFormatter::new(),
        }
    }

    fn braces<F>(&mut self, body: F) -> SurfaceResult<()>
    where
        F: FnOnce(&mut Self) -> SurfaceResult<()>,
    {
        self.writer.open_block();
        let result = body(self);
        self.writer.close_block();
        result
    }

    /// Emit `items` sorted by name inside one block per namespace.
    ///
    /// Names compare without their arity marker, so `IVector` precedes
    /// `IVectorView`; the full metadata name breaks ties. Returns the items
    /// in the order they were written.
    fn write_by_namespace<T, K, F>(
        &mut self,
        mut items: Vec<T>,
        key: K,
        mut write_item: F,
    ) -> SurfaceResult<Vec<T>>
    where
        K: Fn(&T) -> (&str, &str),
        F: FnMut(&mut Self, &T) -> SurfaceResult<()>,
    {
        items.sort_by(|a, b| {
            let (a_namespace, a_name) = key(a);
            let (b_namespace, b_name) = key(b);
            a_namespace
                .cmp(b_namespace)
                .then_with(|| strip_arity(a_name).cmp(strip_arity(b_name)))
                .then_with(|| a_name.cmp(b_name))
        });

        let mut groups: Vec<Vec<T>> = Vec::new();
        for item in items {
            match groups.last_mut() {
                Some(group) if key(&group[0]).0 == key(&item).0 => group.push(item),
                _ => groups.push(vec![item]),
            }
        }

        for group in &groups {
            self.writer
                .write_line(format!("namespace {}", key(&group[0]).0));
            self.braces(|emitter| {
                for item in group {
                    write_item(emitter, item)?;
                }
                Ok(())
            })?;
            self.writer.write_separator();
        }

        Ok(groups.into_iter().flatten().collect())
    }

    fn write_type(&mut self, ty: &TypeDescriptor) -> SurfaceResult<()> {
        let type_name = ty.full_name();
        let site = Site::of_type(&type_name);
        debug!(type_name = %type_name, kind = %ty.kind(), "surface.type");

        self.writer.write_doc_comment(None);

        match &ty.shape {
            TypeShape::Enum { underlying, flags } => self.write_enum(ty, underlying, *flags)?,

            TypeShape::Struct => {
                self.writer
                    .write_line(format!("public struct {}", declared_name(ty)?));
                self.braces(|emitter| emitter.write_type_body(ty, site))?;
            }

            TypeShape::Interface => {
                let bases = self.formatter.format_base_types(ty)?;
                self.writer
                    .write_line(format!("public interface {}{}", declared_name(ty)?, bases));
                self.braces(|emitter| emitter.write_type_body(ty, site))?;
            }

            TypeShape::Class {
                sealed,
                is_abstract,
            } => {
                if !sealed {
                    return Err(SurfaceError::shape(site.type_name, TypeShapeProblem::NotSealed));
                }

                // Abstract and sealed together is a static class
                let is_static = *is_abstract;
                let modifier = if is_static { "static" } else { "sealed" };
                let bases = self.formatter.format_base_types(ty)?;
                self.writer.write_line(format!(
                    "public {} class {}{}",
                    modifier,
                    declared_name(ty)?,
                    bases
                ));

                self.braces(|emitter| {
                    // Keeps the compiler from adding a public default constructor
                    if !is_static && !ty.has_public_constructor() {
                        emitter
                            .writer
                            .write_line(format!("internal {}() {{ }}", strip_arity(&ty.name)));
                        emitter.writer.write_separator();
                    }
                    emitter.write_type_body(ty, site)
                })?;
            }

            TypeShape::Delegate => {
                return Err(SurfaceError::shape(site.type_name, TypeShapeProblem::UnknownKind));
            }
        }

        self.writer.write_separator();
        Ok(())
    }

    fn write_enum(&mut self, ty: &TypeDescriptor, underlying: &TypeRef, flags: bool) -> SurfaceResult<()> {
        let keyword = enum_underlying_keyword(underlying).ok_or_else(|| {
            SurfaceError::UnmappedEnumUnderlying {
                type_name: ty.full_name(),
                underlying: underlying.display_name(),
            }
        })?;

        if flags {
            self.writer.write_line("[System.Flags]");
        }
        self.writer
            .write_line(format!("public enum {} : {}", ty.name, keyword));

        self.braces(|emitter| {
            for field in ty.members_of(MemberCategory::Field) {
                if field.name == ENUM_VALUE_FIELD {
                    continue;
                }
                if let MemberKind::Field {
                    constant: Some(value),
                    ..
                } = field.kind
                {
                    emitter.writer.write_doc_comment(None);
                    emitter
                        .writer
                        .write_line(format!("{} = {},", field.name, value));
                }
            }
            Ok(())
        })
    }

    /// Emit the surface members of a struct, interface or class
    fn write_type_body(&mut self, ty: &TypeDescriptor, site: Site<'_>) -> SurfaceResult<()> {
        for member in ty.members_of(MemberCategory::Constructor) {
            if member.is_public() {
                let line = self
                    .formatter
                    .format_constructor(ty, member, site.member(&member.name))?;
                self.write_member(ty, member, line);
            }
        }

        for member in ty.members_of(MemberCategory::Method) {
            if wants_method(member, site)? {
                let line = self
                    .formatter
                    .format_method(ty, member, site.member(&member.name))?;
                self.write_member(ty, member, line);
            }
        }

        for member in ty.members_of(MemberCategory::Property) {
            if member.is_public() {
                let (header, accessors) =
                    self.formatter
                        .format_property(ty, member, site.member(&member.name))?;
                self.writer.write_doc_comment(document_member(ty, member).as_deref());
                self.writer.write_line(header);
                self.braces(|emitter| {
                    for accessor in accessors {
                        emitter.writer.write_line(accessor);
                    }
                    Ok(())
                })?;
                self.writer.write_separator();
            }
        }

        for member in ty.members_of(MemberCategory::Field).filter(|m| m.is_public()) {
            if let MemberKind::Field { ty: field_type, .. } = &member.kind {
                let line = self.formatter.format_field(
                    ty,
                    member,
                    field_type,
                    site.member(&member.name),
                )?;
                self.write_member(ty, member, line);
            }
        }

        for member in ty.members_of(MemberCategory::Event).filter(|m| m.is_public()) {
            if let MemberKind::Event { handler } = &member.kind {
                let line = self.formatter.format_event(
                    ty,
                    member,
                    handler,
                    site.member(&member.name),
                )?;
                self.write_member(ty, member, line);
            }
        }

        if ty.nested_types.iter().any(|nested| nested.visibility.is_public()) {
            return Err(SurfaceError::shape(
                site.type_name,
                TypeShapeProblem::NestedPublicType,
            ));
        }

        Ok(())
    }

    fn write_member(&mut self, ty: &TypeDescriptor, member: &MemberDescriptor, line: String) {
        self.writer.write_doc_comment(document_member(ty, member).as_deref());
        self.writer.write_line(line);
        self.writer.write_separator();
    }
}

/// Decide whether a method belongs on the surface
fn wants_method(method: &MemberDescriptor, site: Site<'_>) -> SurfaceResult<bool> {
    if !method.is_public() {
        return Ok(false);
    }
    if !method.special_name {
        return Ok(true);
    }

    if HIDDEN_SPECIAL_PREFIXES
        .iter()
        .any(|prefix| method.name.starts_with(prefix))
    {
        return Ok(false);
    }
    if method.name.starts_with(OPERATOR_PREFIX) {
        return Ok(true);
    }

    Err(SurfaceError::special_method(site.type_name, &method.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParameterProblem;
    use crate::ir::{JsonMetadataSource, ModuleMetadata, NamedType, ParameterDescriptor, Visibility};
    use crate::test::*;
    use pretty_assertions::assert_eq;

    fn generate(module: ModuleMetadata) -> SurfaceResult<ModuleSurface> {
        let registry = PlaceholderRegistry::new();
        SurfaceGenerator::new(&mock_source(module), &registry).generate()
    }

    fn single(ty: TypeDescriptor) -> ModuleMetadata {
        ModuleMetadata::new(DEMO_MODULE)
            .reference(FOUNDATION_MODULE)
            .type_def(ty)
    }

    #[test]
    fn test_mock_module_surface() {
        let surface = generate(mock_module()).unwrap();

        let expected = r#"// generated by extract-surface

namespace Demo
{
    /// <summary></summary>
    [System.Flags]
    public enum Blend : uint
    {
        /// <summary></summary>
        None = 0,
        /// <summary></summary>
        Add = 1,
        /// <summary></summary>
        Multiply = 2,
    }

    /// <summary></summary>
    public sealed class Canvas : global::System.Object
    {
        internal Canvas() { }

        /// <summary></summary>
        public global::Windows.Foundation.Size Size
        {
            get { throw new System.NotImplementedException(); }
        }
    }

    /// <summary></summary>
    public struct Vector2
    {
        /// <summary></summary>
        public static global::Demo.Vector2 operator +(global::Demo.Vector2 left, global::Demo.Vector2 right) { throw new System.NotImplementedException(); }

        /// <summary></summary>
        public global::System.Single X;

        /// <summary></summary>
        public global::System.Single Y;
    }
}

namespace Windows.Foundation
{
    public struct Size { }
}
"#;
        assert_eq!(surface.source, expected);
        assert_eq!(surface.module, DEMO_MODULE);
        assert_eq!(surface.type_count, 3);
        assert_eq!(
            surface.placeholders,
            vec![foundation_type("Size", TypeKind::Struct).identity()]
        );
        assert!(surface.warnings.is_empty());
    }

    #[test]
    fn test_custom_header() {
        let registry = PlaceholderRegistry::new();
        let source = mock_source(ModuleMetadata::new(DEMO_MODULE));
        let surface = SurfaceGenerator::new(&source, &registry)
            .with_header("// surface of Demo")
            .generate()
            .unwrap();
        assert_eq!(surface.source, "// surface of Demo\n");
        assert!(surface.placeholders.is_empty());
    }

    #[test]
    fn test_types_sorted_and_grouped_by_namespace() {
        let module = ModuleMetadata::new(DEMO_MODULE)
            .type_def(TypeDescriptor::structure("Demo.Text", "Format"))
            .type_def(TypeDescriptor::structure("Demo", "Zeta"))
            .type_def(TypeDescriptor::structure("Demo", "Alpha"));

        let source = generate(module).unwrap().source;
        let order: Vec<&str> = source
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("namespace") || line.starts_with("public struct"))
            .collect();
        assert_eq!(
            order,
            vec![
                "namespace Demo",
                "public struct Alpha",
                "public struct Zeta",
                "namespace Demo.Text",
                "public struct Format",
            ]
        );
    }

    #[test]
    fn test_public_constructor_suppresses_synthesized_one() {
        let widget = TypeDescriptor::sealed_class(DEMO_MODULE, "Widget")
            .member(MemberDescriptor::constructor().param("size", int32()));

        let source = generate(single(widget)).unwrap().source;
        assert!(!source.contains("internal Widget()"));
        assert!(source.contains(
            "/// Initializes a new instance of the Widget class.\n        /// </summary>\n        public Widget(global::System.Int32 size) { throw new System.NotImplementedException(); }"
        ));
    }

    #[test]
    fn test_static_class_has_no_constructor() {
        let helpers = TypeDescriptor::static_class(DEMO_MODULE, "Helpers").member(
            MemberDescriptor::method("Clamp", int32())
                .static_member()
                .extension()
                .param("value", int32()),
        );

        let source = generate(single(helpers)).unwrap().source;
        assert!(source.contains("public static class Helpers\n"));
        assert!(!source.contains("internal Helpers()"));
        assert!(source.contains(
            "public static global::System.Int32 Clamp(this global::System.Int32 value) { throw new System.NotImplementedException(); }"
        ));
    }

    #[test]
    fn test_struct_constructor_and_dispose_docs() {
        let handle = TypeDescriptor::structure(DEMO_MODULE, "Handle")
            .member(MemberDescriptor::constructor().param("raw", int32()))
            .member(MemberDescriptor::method("Dispose", TypeRef::Void));

        let source = generate(single(handle)).unwrap().source;
        assert!(source.contains("/// Initializes a new instance of the Handle structure."));
        assert!(source.contains("/// Releases all resources used by the Handle."));
        assert!(source.contains("public void Dispose() { throw new System.NotImplementedException(); }"));
    }

    #[test]
    fn test_interface_members_are_declarations() {
        let closable = foundation_type("IClosable", TypeKind::Interface);
        let iface = TypeDescriptor::interface(DEMO_MODULE, "IWidget")
            .implements(closable.into())
            .member(MemberDescriptor::method("Close", TypeRef::Void))
            .member(MemberDescriptor::property("Name", TypeRef::system_class("String")).writable())
            .member(MemberDescriptor::event(
                "Closed",
                foundation_type("TypedEventHandler`2", TypeKind::Delegate)
                    .with_args(vec![demo_type("IWidget", TypeKind::Interface), TypeRef::system_class("Object")])
                    .into(),
            ));

        let surface = generate(single(iface)).unwrap();
        let expected = r#"    /// <summary></summary>
    public interface IWidget : global::Windows.Foundation.IClosable
    {
        /// <summary></summary>
        void Close();

        /// <summary></summary>
        global::System.String Name
        {
            get;
            set;
        }

        /// <summary></summary>
        event global::Windows.Foundation.TypedEventHandler<global::Demo.IWidget, global::System.Object> Closed;
    }
"#;
        assert!(surface.source.contains(expected), "{}", surface.source);

        let names: Vec<String> = surface.placeholders.iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["IClosable", "TypedEventHandler`2"]);
        assert!(surface
            .source
            .contains("public delegate void TypedEventHandler<T0, T1>();"));
    }

    #[test]
    fn test_override_event_and_static_field() {
        let widget = TypeDescriptor::sealed_class(DEMO_MODULE, "Widget")
            .member(MemberDescriptor::method("ToString", TypeRef::system_class("String")).overriding())
            .member(MemberDescriptor::field("Empty", demo_type("Widget", TypeKind::Class)).static_member())
            .member(
                MemberDescriptor::event("Changed", foundation_type("EventHandler`1", TypeKind::Delegate)
                    .with_args(vec![int32()])
                    .into())
                .static_member(),
            );

        let source = generate(single(widget)).unwrap().source;
        assert!(source.contains("public override global::System.String ToString() { throw new System.NotImplementedException(); }"));
        assert!(source.contains("public static global::Demo.Widget Empty;"));
        assert!(source.contains("public static event global::Windows.Foundation.EventHandler<global::System.Int32> Changed;"));
    }

    #[test]
    fn test_hidden_members_are_skipped() {
        let widget = TypeDescriptor::sealed_class(DEMO_MODULE, "Widget")
            .member(MemberDescriptor::method("Reset", TypeRef::Void).with_visibility(Visibility::Internal))
            .member(MemberDescriptor::method("put_Name", TypeRef::Void).special())
            .member(MemberDescriptor::method("remove_Changed", TypeRef::Void).special())
            .member(MemberDescriptor::field("secret", int32()).with_visibility(Visibility::Private))
            .nested("Inner", Visibility::Private);

        let source = generate(single(widget)).unwrap().source;
        for hidden in ["Reset", "put_Name", "remove_Changed", "secret", "Inner"] {
            assert!(!source.contains(hidden), "{} leaked", hidden);
        }
    }

    #[test]
    fn test_generic_bridge_placeholder() {
        let operation = bridge_type("Windows.Foundation", "IAsyncOperation`1", TypeKind::Interface);
        let loader = TypeDescriptor::static_class(DEMO_MODULE, "Loader")
            .member(
                MemberDescriptor::method("LoadAsync", operation.clone().with_args(vec![int32()]).into())
                    .static_member(),
            )
            .member(
                MemberDescriptor::method("LoadFlagAsync", operation.clone().with_args(vec![TypeRef::system("Boolean")]).into())
                    .static_member(),
            );

        let surface = generate(single(loader)).unwrap();
        assert!(surface.source.contains(
            "public static global::Windows.Foundation.IAsyncOperation<global::System.Int32> LoadAsync()"
        ));
        assert!(surface.source.contains(
            "namespace Windows.Foundation\n{\n    public interface IAsyncOperation<T0> { }\n}\n"
        ));
        assert_eq!(surface.placeholders, vec![operation.identity()]);
    }

    #[test]
    fn test_registered_placeholder_not_repeated() {
        let mut registry = PlaceholderRegistry::new();
        registry.register(foundation_type("Size", TypeKind::Struct).identity());

        let source = mock_source(mock_module());
        let surface = SurfaceGenerator::new(&source, &registry).generate().unwrap();
        assert!(surface.placeholders.is_empty());
        assert!(!surface.source.contains("namespace Windows.Foundation"));
        assert!(surface.source.contains("global::Windows.Foundation.Size Size"));
    }

    #[test]
    fn test_validator_warnings_are_reported() {
        let module = ModuleMetadata::new(DEMO_MODULE)
            .type_def(TypeDescriptor::sealed_class(DEMO_MODULE, "Widget"))
            .type_def(TypeDescriptor::interface(DEMO_MODULE, "IWidgetFactory"));

        let surface = generate(module).unwrap();
        assert_eq!(surface.warnings.len(), 1);
        assert!(surface.source.contains("public interface IWidgetFactory"));
    }

    #[test]
    fn test_indexed_property_fails() {
        let list = TypeDescriptor::sealed_class(DEMO_MODULE, "List")
            .member(MemberDescriptor::property("Item", int32()).indexed_by("index", int32()));

        assert_eq!(
            generate(single(list)).unwrap_err(),
            SurfaceError::parameter("Demo.List::Item", ParameterProblem::IndexedProperty)
        );
    }

    #[test]
    fn test_fatal_shapes() {
        let unsealed = TypeDescriptor::new(
            DEMO_MODULE,
            "Open",
            TypeShape::Class {
                sealed: false,
                is_abstract: false,
            },
        );
        assert_eq!(
            generate(single(unsealed)).unwrap_err(),
            SurfaceError::shape("Demo.Open", TypeShapeProblem::NotSealed)
        );

        let delegate = TypeDescriptor::new(DEMO_MODULE, "Callback", TypeShape::Delegate);
        assert_eq!(
            generate(single(delegate)).unwrap_err(),
            SurfaceError::shape("Demo.Callback", TypeShapeProblem::UnknownKind)
        );

        let nested = TypeDescriptor::structure(DEMO_MODULE, "Outer").nested("Inner", Visibility::Public);
        assert_eq!(
            generate(single(nested)).unwrap_err(),
            SurfaceError::shape("Demo.Outer", TypeShapeProblem::NestedPublicType)
        );

        let long_enum = TypeDescriptor::enumeration(DEMO_MODULE, "Wide", TypeRef::system("Int64"));
        assert_eq!(
            generate(single(long_enum)).unwrap_err(),
            SurfaceError::UnmappedEnumUnderlying {
                type_name: "Demo.Wide".to_string(),
                underlying: "System.Int64".to_string(),
            }
        );
    }

    #[test]
    fn test_fatal_members() {
        let static_ctor = TypeDescriptor::sealed_class(DEMO_MODULE, "Widget")
            .member(MemberDescriptor::constructor().static_member());
        assert_eq!(
            generate(single(static_ctor)).unwrap_err(),
            SurfaceError::StaticConstructor {
                type_name: "Demo.Widget".to_string()
            }
        );

        let hidden_static_ctor = TypeDescriptor::sealed_class(DEMO_MODULE, "Widget").member(
            MemberDescriptor::constructor()
                .static_member()
                .with_visibility(Visibility::Private),
        );
        assert!(generate(single(hidden_static_ctor)).is_ok());

        let invoke = TypeDescriptor::sealed_class(DEMO_MODULE, "Widget")
            .member(MemberDescriptor::method("Invoke_Hook", TypeRef::Void).special());
        assert_eq!(
            generate(single(invoke)).unwrap_err(),
            SurfaceError::special_method("Demo.Widget", "Invoke_Hook")
        );

        let pointer = TypeDescriptor::structure(DEMO_MODULE, "Buffer")
            .member(MemberDescriptor::field("Data", TypeRef::pointer(int32())));
        assert_eq!(
            generate(single(pointer)).unwrap_err(),
            SurfaceError::shape("Demo.Buffer", TypeShapeProblem::PointerType)
        );

        let optional = TypeDescriptor::structure(DEMO_MODULE, "Brush").member(
            MemberDescriptor::method("Fill", TypeRef::Void)
                .with_param(ParameterDescriptor::new("opacity", TypeRef::system("Single"), 0).optional()),
        );
        assert_eq!(
            generate(single(optional)).unwrap_err(),
            SurfaceError::parameter("Demo.Brush::Fill", ParameterProblem::Optional)
        );
    }

    fn collections_type(name: &str, args: Vec<TypeRef>) -> TypeRef {
        NamedType::new(
            "Windows.Foundation.Collections",
            name,
            FOUNDATION_MODULE,
            TypeKind::Interface,
        )
        .with_args(args)
        .into()
    }

    #[test]
    fn test_generic_names_sort_without_arity_marker() {
        let holder = TypeDescriptor::structure(DEMO_MODULE, "Holder")
            .member(MemberDescriptor::method("View", collections_type("IVectorView`1", vec![int32()])))
            .member(MemberDescriptor::method("Items", collections_type("IVector`1", vec![int32()])))
            .member(MemberDescriptor::method(
                "Lookup",
                collections_type("IMapView`2", vec![int32(), int32()]),
            ));

        let surface = generate(single(holder)).unwrap();

        let names: Vec<&str> = surface
            .placeholders
            .iter()
            .map(|identity| identity.name.as_str())
            .collect();
        assert_eq!(names, vec!["IMapView`2", "IVector`1", "IVectorView`1"]);

        let vector = surface.source.find("public interface IVector<T0> { }").unwrap();
        let view = surface.source.find("public interface IVectorView<T0> { }").unwrap();
        assert!(vector < view);
    }

    #[test]
    fn test_declared_generic_names_sort_without_arity_marker() {
        let module = ModuleMetadata::new(DEMO_MODULE)
            .type_def(TypeDescriptor::interface(DEMO_MODULE, "IMapView`2"))
            .type_def(TypeDescriptor::interface(DEMO_MODULE, "IMap`2"));

        let source = generate(module).unwrap().source;
        let map = source.find("public interface IMap<T0, T1>\n").unwrap();
        let view = source.find("public interface IMapView<T0, T1>\n").unwrap();
        assert!(map < view);
    }

    #[test]
    fn test_generic_declared_type_from_document() {
        let json = r#"{
            "name": "Demo",
            "references": ["Windows.Foundation.FoundationContract"],
            "types": [
                { "name": "IBag`1", "namespace": "Demo", "kind": "interface" },
                {
                    "name": "Shelf",
                    "namespace": "Demo",
                    "kind": "interface",
                    "members": [
                        {
                            "name": "Contents",
                            "kind": "method",
                            "returnType": {
                                "form": "named",
                                "namespace": "Demo",
                                "name": "IBag`1",
                                "module": "Demo",
                                "kind": "interface",
                                "genericArgs": [
                                    { "form": "named", "namespace": "System", "name": "Int32", "module": "mscorlib", "kind": "struct" }
                                ]
                            }
                        }
                    ]
                }
            ]
        }"#;

        let source = JsonMetadataSource::from_json(json).unwrap();
        let registry = PlaceholderRegistry::new();
        let surface = SurfaceGenerator::new(&source, &registry).generate().unwrap();

        assert!(surface.source.contains("public interface IBag<T0>\n"));
        assert!(surface
            .source
            .contains("global::Demo.IBag<global::System.Int32> Contents();"));
    }

    #[test]
    fn test_generic_declared_type() {
        let mut bag = TypeDescriptor::interface(DEMO_MODULE, "IBag`1");
        bag.generic_arity = 1;

        let source = generate(single(bag)).unwrap().source;
        assert!(source.contains("public interface IBag<T0>\n"));
    }

    #[test]
    fn test_document_member_rules() {
        let class = TypeDescriptor::sealed_class(DEMO_MODULE, "Widget");
        assert_eq!(
            document_member(&class, &MemberDescriptor::constructor()).as_deref(),
            Some("Initializes a new instance of the Widget class.")
        );
        assert_eq!(
            document_member(&class, &MemberDescriptor::method("Dispose", TypeRef::Void)).as_deref(),
            Some("Releases all resources used by the Widget.")
        );
        assert_eq!(
            document_member(&class, &MemberDescriptor::method("Close", TypeRef::Void)),
            None
        );
        assert_eq!(
            document_member(&class, &MemberDescriptor::property("Dispose", int32())),
            None
        );
    }

    #[test]
    fn test_json_source_end_to_end() {
        let json = r#"{
            "name": "Demo",
            "references": ["Windows.Foundation.FoundationContract"],
            "types": [
                {
                    "name": "Widget",
                    "namespace": "Demo",
                    "kind": "class",
                    "sealed": true,
                    "members": [
                        {
                            "name": "Resize",
                            "kind": "method",
                            "returnType": { "form": "void" },
                            "parameters": [
                                {
                                    "name": "size",
                                    "position": 0,
                                    "type": {
                                        "form": "named",
                                        "namespace": "Windows.Foundation",
                                        "name": "Size",
                                        "module": "Windows.Foundation.FoundationContract",
                                        "kind": "struct"
                                    }
                                }
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let source = JsonMetadataSource::from_json(json).unwrap();
        let registry = PlaceholderRegistry::new();
        let surface = SurfaceGenerator::new(&source, &registry).generate().unwrap();
        assert!(surface
            .source
            .contains("public void Resize(global::Windows.Foundation.Size size)"));
        assert_eq!(
            surface.placeholders,
            vec![NamedType::new("Windows.Foundation", "Size", FOUNDATION_MODULE, TypeKind::Struct).identity()]
        );
    }
}
