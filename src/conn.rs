use {
    crate::{
        ifs::{
            wp_color_management_surface_feedback_v1::WpColorManagementSurfaceFeedbackV1,
            wp_image_description_info_v1::WpImageDescriptionInfoV1,
            wp_image_description_v1::{PendingDescription, WpImageDescriptionV1},
        },
        utils::{bitfield::Bitfield, copyhashmap::CopyHashMap},
        wire::{
            ObjectId, Request, WpColorManagementSurfaceFeedbackV1Id, WpImageDescriptionInfoV1Id,
            WpImageDescriptionV1Id,
        },
    },
    std::{cell::RefCell, rc::Rc},
};

/// The outward edge towards the embedding runtime.
///
/// Requests are typed protocol messages. Marshalling them onto the wayland
/// socket, and feeding compositor events back into
/// [`State::dispatch`](crate::state::State::dispatch), is the embedder's job.
pub trait Transport {
    fn submit(&self, req: Request);
}

/// Object id allocation and the tables that route compositor events to the
/// protocol objects expecting them.
pub struct Conn {
    transport: Rc<dyn Transport>,
    ids: RefCell<Bitfield>,
    pub descriptions: CopyHashMap<WpImageDescriptionV1Id, Rc<WpImageDescriptionV1>>,
    pub infos: CopyHashMap<WpImageDescriptionInfoV1Id, Rc<WpImageDescriptionInfoV1>>,
    pub feedbacks:
        CopyHashMap<WpColorManagementSurfaceFeedbackV1Id, Rc<WpColorManagementSurfaceFeedbackV1>>,
    /// In-flight description creations keyed by the id of the description
    /// they will produce.
    pub pendings: CopyHashMap<WpImageDescriptionV1Id, Rc<PendingDescription>>,
}

impl Conn {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        let mut ids = Bitfield::default();
        // 0 is the null object.
        ids.take(0);
        Self {
            transport,
            ids: RefCell::new(ids),
            descriptions: Default::default(),
            infos: Default::default(),
            feedbacks: Default::default(),
            pendings: Default::default(),
        }
    }

    pub fn id<T: From<ObjectId>>(&self) -> T {
        T::from(ObjectId::from_raw(self.ids.borrow_mut().acquire()))
    }

    pub fn release_id(&self, id: ObjectId) {
        self.ids.borrow_mut().release(id.raw());
    }

    pub fn submit<T: Into<Request>>(&self, req: T) {
        self.transport.submit(req.into());
    }

    pub fn clear(&self) {
        self.descriptions.clear();
        self.infos.clear();
        self.feedbacks.clear();
        self.pendings.clear();
    }
}
