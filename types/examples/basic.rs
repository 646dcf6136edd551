//! Basic example demonstrating both ArenaBuilder and BoxBuilder.
//!
//! Run with: cargo run --example basic

use bumpalo::Bump;
use tyseq_types::{
    ArenaBuilder, BoxBuilder, TyDisplay, TypeBuilder, TypeFolder, TypeKind, TypeView, convert_ty,
    types_equal,
};

/// Turns every named descriptor into a pointer to it.
struct BoxNamed {
    builder: BoxBuilder,
}

impl TypeFolder<BoxBuilder> for BoxNamed {
    fn builder(&self) -> BoxBuilder {
        self.builder
    }

    fn fold_ty(&mut self, ty: tyseq_types::Ty<BoxBuilder>) -> tyseq_types::Ty<BoxBuilder> {
        match ty.view(self.builder) {
            TypeKind::Named(_) => self.builder.pointer(ty.clone()),
            _ => self.super_fold_ty(ty),
        }
    }
}

fn main() {
    println!("=== Type Descriptor Example ===\n");

    println!("1. BoxBuilder (reference counting):");
    let box_builder = BoxBuilder::new();

    let point = box_builder.named("Point");
    let seq = box_builder.sequence([
        box_builder.int(),
        point.clone(),
        box_builder.group(box_builder.double(), 3),
    ]);
    println!("   sequence: {}", seq.display(box_builder));

    let mut folder = BoxNamed {
        builder: box_builder,
    };
    let boxed = folder.fold_ty(seq.clone());
    println!("   boxed:    {}", boxed.display(box_builder));

    println!("\n2. ArenaBuilder (bump allocation):");
    let arena = Bump::new();
    let arena_builder = ArenaBuilder::new(&arena);

    let converted = convert_ty(seq.clone(), box_builder, arena_builder);
    println!("   converted: {}", converted.display(arena_builder));
    println!(
        "   structurally equal: {}",
        types_equal(seq, box_builder, converted, arena_builder)
    );
}
