use uuid::Uuid;

/// How many values a port accepts from each source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortAccess {
    Item,
    List,
}

/// One input slot: display label, short code, and the upstream sources in
/// connection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPort {
    pub name: String,
    pub nickname: String,
    pub optional: bool,
    pub access: PortAccess,
    pub sources: Vec<Uuid>,
}

impl InputPort {
    /// Fresh optional list-access port labeled with the 1-based `number`.
    pub fn numbered(number: usize) -> Self {
        Self {
            name: format!("Input {number}"),
            nickname: format!("I{number}"),
            optional: true,
            access: PortAccess::List,
            sources: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Relabel every port contiguously 1..N. Label bookkeeping only: order and
/// connections are untouched.
pub fn renumber(ports: &mut [InputPort]) {
    for (index, port) in ports.iter_mut().enumerate() {
        let number = index + 1;
        port.name = format!("Input {number}");
        port.nickname = format!("I{number}");
    }
}

/// Insert one fresh empty port at `index` and relabel the list.
pub fn insert_port(ports: &mut Vec<InputPort>, index: usize) -> bool {
    if index > ports.len() {
        return false;
    }
    ports.insert(index, InputPort::numbered(index + 1));
    renumber(ports);
    true
}

/// Remove the port at `index` and relabel the rest. Refused while only one
/// port remains.
pub fn remove_port(ports: &mut Vec<InputPort>, index: usize) -> bool {
    if ports.len() <= 1 || index >= ports.len() {
        return false;
    }
    ports.remove(index);
    renumber(ports);
    true
}

/// Auto-grow-on-fill: while the trailing port holds a source, append an
/// empty one so there is always a free slot to connect into.
pub fn ensure_trailing_spare(ports: &mut Vec<InputPort>) {
    if ports.is_empty() {
        ports.push(InputPort::numbered(1));
        return;
    }
    if let Some(last) = ports.last() {
        if !last.is_empty() {
            let number = ports.len() + 1;
            ports.push(InputPort::numbered(number));
        }
    }
}
