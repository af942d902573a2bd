use foreign_interop::{
    descriptor::{byval_arg_of, install_type_system, type_system},
    field::{get_reference_field, set_reference_field},
    reference_type, value_type, ArgType, ClassHandle, DescriptorError, ForeignTypeSystem,
    NoArgClass, NoArgType, Ptr, ReferenceHandle, TypeHandle,
};
use std::{
    ffi::c_void,
    ptr::NonNull,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

/// Fake runtime metadata: one class with its by-value and this-arg descriptors.
#[repr(C)]
struct ClassRecord {
    byval_arg: u64,
    this_arg: u64,
}

static TRANSFORM_CLASS: ClassRecord = ClassRecord {
    byval_arg: 1,
    this_arg: 2,
};

fn class_handle(record: &'static ClassRecord) -> ClassHandle {
    ClassHandle::new(NonNull::from(record).cast())
}

fn record_of(class: ClassHandle) -> &'static ClassRecord {
    unsafe { &*class.as_ptr().cast::<ClassRecord>() }
}

struct RecordingTypeSystem {
    barrier_stores: Mutex<Vec<(usize, usize, usize)>>,
    this_arg_lookups: AtomicUsize,
}

impl ForeignTypeSystem for RecordingTypeSystem {
    fn this_arg(&self, class: ClassHandle) -> Result<TypeHandle, DescriptorError> {
        self.this_arg_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(TypeHandle::new(NonNull::from(&record_of(class).this_arg).cast()))
    }

    fn byval_arg(&self, class: ClassHandle) -> Result<TypeHandle, DescriptorError> {
        Ok(TypeHandle::new(NonNull::from(&record_of(class).byval_arg).cast()))
    }

    unsafe fn write_barrier(&self, instance: *mut c_void, slot: *mut *mut c_void, value: *mut c_void) {
        self.barrier_stores
            .lock()
            .unwrap()
            .push((instance as usize, slot as usize, value as usize));
        unsafe { slot.write_unaligned(value) }
    }
}

static SYSTEM: RecordingTypeSystem = RecordingTypeSystem {
    barrier_stores: Mutex::new(Vec::new()),
    this_arg_lookups: AtomicUsize::new(0),
};

fn install() {
    let _ = install_type_system(&SYSTEM);
}

#[derive(Clone, Copy)]
#[repr(C)]
struct TransformData([u8; 40]);
value_type!(TransformData);

impl NoArgClass for TransformData {
    fn no_arg_class() -> Result<ClassHandle, DescriptorError> {
        Ok(class_handle(&TRANSFORM_CLASS))
    }
}

#[derive(Clone, Copy)]
struct Missing;
value_type!(Missing);

impl NoArgClass for Missing {
    fn no_arg_class() -> Result<ClassHandle, DescriptorError> {
        Err(DescriptorError::ClassNotFound("UnityEngine::Missing".into()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Material(*mut c_void);
reference_type!(Material);

impl ReferenceHandle for Material {
    fn from_raw(raw: *mut c_void) -> Self {
        Material(raw)
    }
    fn as_raw(&self) -> *mut c_void {
        self.0
    }
}

#[test]
fn wrapper_reports_this_arg_descriptor() {
    install();
    let ty = Ptr::<TransformData>::no_arg_type().unwrap();
    assert_eq!(ty.as_ptr(), (&TRANSFORM_CLASS.this_arg as *const u64).cast::<c_void>());
    assert_ne!(ty, byval_arg_of::<TransformData>().unwrap());
    assert!(SYSTEM.this_arg_lookups.load(Ordering::SeqCst) >= 1);
}

#[test]
fn live_wrapper_matches_no_arg_form() {
    install();
    let mut data = TransformData([0; 40]);
    let ptr = Ptr::from(&mut data);
    assert_eq!(ptr.arg_type(), Ptr::<TransformData>::no_arg_type());
}

#[test]
fn class_lookup_failure_is_propagated() {
    install();
    let mut missing = Missing;
    let ptr = Ptr::from(&mut missing);
    assert_eq!(
        ptr.arg_type(),
        Err(DescriptorError::ClassNotFound("UnityEngine::Missing".into()))
    );
}

#[test]
fn reference_store_goes_through_barrier_once() {
    install();
    assert!(type_system().is_ok());

    let mut object = [0usize; 8];
    let base = object.as_mut_ptr().cast::<c_void>();
    let material = Material(0xBEEF0usize as *mut c_void);

    unsafe { set_reference_field::<Material, 0x10>(base, material) };

    let stores: Vec<_> = SYSTEM
        .barrier_stores
        .lock()
        .unwrap()
        .iter()
        .copied()
        .filter(|&(instance, _, _)| instance == base as usize)
        .collect();
    assert_eq!(stores, vec![(base as usize, base as usize + 0x10, 0xBEEF0)]);
    assert_eq!(unsafe { get_reference_field::<Material, 0x10>(base) }, material);
    assert_eq!(object[0x10 / std::mem::size_of::<usize>()], 0xBEEF0);
}

#[test]
fn second_install_fails() {
    install();
    assert_eq!(install_type_system(&SYSTEM), Err(DescriptorError::AlreadyInstalled));
}
