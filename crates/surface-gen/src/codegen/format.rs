//! Signature formatting
//!
//! Pure text rules for turning type references, parameters and member
//! signatures into C# declarations. The only state is the [`SeenTypeSet`]:
//! every named type the formatter renders is recorded there by its unbound
//! identity, which later drives placeholder generation.

use crate::error::{ParameterProblem, SurfaceError, SurfaceResult, TypeShapeProblem};
use crate::ir::{
    generic_name, positional_params, strip_arity, MemberDescriptor, MemberKind,
    ParameterDescriptor, SeenTypeSet, TypeDescriptor, TypeKind, TypeRef,
};
use std::fmt;

/// Body given to every non-interface member
pub const NOT_IMPLEMENTED_BODY: &str = " { throw new System.NotImplementedException(); }";

/// Prefix that makes rendered type names immune to namespace shadowing
pub const GLOBAL_PREFIX: &str = "global::";

/// Metadata name of the implicit conversion operator
pub const IMPLICIT_CONVERSION: &str = "op_Implicit";

/// Operator overloads that can be projected, by metadata name
const OPERATORS: &[(&str, &str)] = &[
    ("op_Addition", "+"),
    ("op_Subtraction", "-"),
    ("op_Multiply", "*"),
    ("op_Division", "/"),
    ("op_UnaryNegation", "-"),
    ("op_Equality", "=="),
    ("op_Inequality", "!="),
];

/// How an operator overload is spelled in source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSpelling {
    /// `operator <symbol>`
    Symbol(&'static str),
    /// `implicit operator <ReturnType>`
    ImplicitConversion,
}

/// Look up the source spelling of an operator method
pub fn operator_spelling(name: &str) -> Option<OperatorSpelling> {
    if name == IMPLICIT_CONVERSION {
        return Some(OperatorSpelling::ImplicitConversion);
    }
    OPERATORS
        .iter()
        .find(|(metadata, _)| *metadata == name)
        .map(|(_, symbol)| OperatorSpelling::Symbol(symbol))
}

/// Where a signature is being rendered, for error reporting
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    /// Fully qualified declaring type
    pub type_name: &'a str,
    /// Member name, when rendering a member
    pub member: Option<&'a str>,
}

impl<'a> Site<'a> {
    /// Site for a type header
    pub fn of_type(type_name: &'a str) -> Self {
        Self {
            type_name,
            member: None,
        }
    }

    /// Site for a member of this type
    pub fn member(self, name: &'a str) -> Self {
        Self {
            member: Some(name),
            ..self
        }
    }
}

impl fmt::Display for Site<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.member {
            Some(member) => write!(f, "{}::{}", self.type_name, member),
            None => write!(f, "{}", self.type_name),
        }
    }
}

/// Modifier prefix for a member, including the trailing space
pub fn format_modifiers(declaring: TypeKind, is_static: bool, is_override: bool) -> String {
    let mut result = String::new();

    // Interface members are implicitly public and may not say so
    if declaring != TypeKind::Interface {
        result.push_str("public ");
    }
    if is_static {
        result.push_str("static ");
    }
    if is_override {
        result.push_str("override ");
    }

    result
}

/// Body clause for a member of the given declaring kind
pub fn format_body(declaring: TypeKind) -> &'static str {
    match declaring {
        TypeKind::Interface => ";",
        _ => NOT_IMPLEMENTED_BODY,
    }
}

/// Name a type is declared under, with positional parameters for generics.
///
/// The arity comes from the name's marker or the `generic_arity` field,
/// whichever is set; both set and different is fatal.
pub fn declared_name(ty: &TypeDescriptor) -> SurfaceResult<String> {
    let encoded = ty.name_arity();
    if encoded > 0 && ty.generic_arity > 0 && encoded != ty.generic_arity {
        return Err(SurfaceError::GenericArityMismatch {
            type_name: ty.full_name(),
            declared: ty.generic_arity,
            encoded,
        });
    }

    let arity = encoded.max(ty.generic_arity);
    if arity > 0 {
        Ok(generic_name(&ty.name, positional_params(arity)))
    } else {
        Ok(strip_arity(&ty.name).to_string())
    }
}

/// Stateful formatter for one module
#[derive(Debug, Default)]
pub struct SignatureFormatter {
    seen: SeenTypeSet,
}

impl SignatureFormatter {
    /// Create a formatter with an empty seen-type set
    pub fn new() -> Self {
        Self::default()
    }

    /// Types touched so far
    pub fn seen(&self) -> &SeenTypeSet {
        &self.seen
    }

    /// Finish, handing back the seen-type set
    pub fn into_seen(self) -> SeenTypeSet {
        self.seen
    }

    /// Render a type reference, recording every named type it mentions
    pub fn format_type(&mut self, ty: &TypeRef, site: Site<'_>) -> SurfaceResult<String> {
        match ty {
            TypeRef::Void => Ok("void".to_string()),

            TypeRef::Pointer { .. } => Err(SurfaceError::shape(
                site.type_name,
                TypeShapeProblem::PointerType,
            )),

            // The by-ref modifier belongs to the parameter, not the type
            TypeRef::ByRef { element } => self.format_type(element, site),

            TypeRef::Named(named) => {
                self.seen.record(named.identity());

                let name = format!("{}{}", GLOBAL_PREFIX, named.full_name());
                if !named.is_generic() {
                    return Ok(name);
                }

                let args = named
                    .generic_args
                    .iter()
                    .map(|arg| self.format_type(arg, site))
                    .collect::<SurfaceResult<Vec<_>>>()?;
                Ok(generic_name(&name, args))
            }
        }
    }

    /// Render one parameter of `member`
    pub fn format_parameter(
        &mut self,
        parameter: &ParameterDescriptor,
        member: &MemberDescriptor,
        site: Site<'_>,
    ) -> SurfaceResult<String> {
        if parameter.is_retval {
            return Err(SurfaceError::parameter(
                site.to_string(),
                ParameterProblem::ReturnValue,
            ));
        }
        if parameter.is_optional {
            return Err(SurfaceError::parameter(
                site.to_string(),
                ParameterProblem::Optional,
            ));
        }

        let mut modifier = String::new();
        if parameter.position == 0 && member.is_extension() {
            modifier.push_str("this ");
        }
        modifier.push_str(parameter.by_ref().prefix());

        let ty = self.format_type(&parameter.ty, site)?;
        Ok(format!("{}{} {}", modifier, ty, parameter.name))
    }

    /// Render the comma-separated parameter list of `member`
    pub fn format_parameter_list(
        &mut self,
        member: &MemberDescriptor,
        site: Site<'_>,
    ) -> SurfaceResult<String> {
        let parameters = member
            .parameters
            .iter()
            .map(|parameter| self.format_parameter(parameter, member, site))
            .collect::<SurfaceResult<Vec<_>>>()?;
        Ok(parameters.join(", "))
    }

    /// Render a constructor declaration
    pub fn format_constructor(
        &mut self,
        declaring: &TypeDescriptor,
        constructor: &MemberDescriptor,
        site: Site<'_>,
    ) -> SurfaceResult<String> {
        if constructor.is_static {
            return Err(SurfaceError::StaticConstructor {
                type_name: site.type_name.to_string(),
            });
        }

        let parameters = self.format_parameter_list(constructor, site)?;
        Ok(format!(
            "public {}({}){}",
            strip_arity(&declaring.name),
            parameters,
            format_body(declaring.kind())
        ))
    }

    /// Render a method declaration, including operator overloads
    pub fn format_method(
        &mut self,
        declaring: &TypeDescriptor,
        method: &MemberDescriptor,
        site: Site<'_>,
    ) -> SurfaceResult<String> {
        let return_type = match &method.kind {
            MemberKind::Method { return_type, .. } => return_type,
            _ => return Err(SurfaceError::special_method(site.type_name, &method.name)),
        };

        let mut return_text = self.format_type(return_type, site)?;
        let mut name = method.name.clone();

        if method.special_name {
            match operator_spelling(&method.name) {
                Some(OperatorSpelling::Symbol(symbol)) => {
                    name = format!("operator {}", symbol);
                }
                Some(OperatorSpelling::ImplicitConversion) => {
                    name = return_text;
                    return_text = "implicit operator".to_string();
                }
                None => {
                    return Err(SurfaceError::special_method(site.type_name, &method.name));
                }
            }
        }

        let parameters = self.format_parameter_list(method, site)?;
        Ok(format!(
            "{}{} {}({}){}",
            format_modifiers(declaring.kind(), method.is_static, method.is_override),
            return_text,
            name,
            parameters,
            format_body(declaring.kind())
        ))
    }

    /// Render a property header and its accessor lines
    pub fn format_property(
        &mut self,
        declaring: &TypeDescriptor,
        property: &MemberDescriptor,
        site: Site<'_>,
    ) -> SurfaceResult<(String, Vec<String>)> {
        let (ty, can_read, can_write, index_parameters) = match &property.kind {
            MemberKind::Property {
                ty,
                can_read,
                can_write,
                index_parameters,
            } => (ty, *can_read, *can_write, index_parameters),
            _ => return Err(SurfaceError::shape(site.type_name, TypeShapeProblem::UnknownKind)),
        };

        if !index_parameters.is_empty() {
            return Err(SurfaceError::parameter(
                site.to_string(),
                ParameterProblem::IndexedProperty,
            ));
        }

        let header = format!(
            "{}{} {}",
            format_modifiers(declaring.kind(), property.is_static, property.is_override),
            self.format_type(ty, site)?,
            property.name
        );

        let body = format_body(declaring.kind());
        let mut accessors = Vec::new();
        if can_read {
            accessors.push(format!("get{}", body));
        }
        if can_write {
            accessors.push(format!("set{}", body));
        }

        Ok((header, accessors))
    }

    /// Render a field declaration
    pub fn format_field(
        &mut self,
        declaring: &TypeDescriptor,
        field: &MemberDescriptor,
        ty: &TypeRef,
        site: Site<'_>,
    ) -> SurfaceResult<String> {
        Ok(format!(
            "{}{} {};",
            format_modifiers(declaring.kind(), field.is_static, false),
            self.format_type(ty, site)?,
            field.name
        ))
    }

    /// Render an event declaration
    pub fn format_event(
        &mut self,
        declaring: &TypeDescriptor,
        event: &MemberDescriptor,
        handler: &TypeRef,
        site: Site<'_>,
    ) -> SurfaceResult<String> {
        Ok(format!(
            "{}event {} {};",
            format_modifiers(declaring.kind(), event.is_static, event.is_override),
            self.format_type(handler, site)?,
            event.name
        ))
    }

    /// Render the ` : Base, IInterface` suffix of a type header.
    ///
    /// Non-public bases and interfaces are left out.
    pub fn format_base_types(&mut self, ty: &TypeDescriptor) -> SurfaceResult<String> {
        let type_name = ty.full_name();
        let site = Site::of_type(&type_name);

        let names = ty
            .base_type
            .iter()
            .chain(ty.interfaces.iter())
            .filter(|base| base.is_public())
            .map(|base| self.format_type(base, site))
            .collect::<SurfaceResult<Vec<_>>>()?;

        if names.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!(" : {}", names.join(", ")))
        }
    }
}
