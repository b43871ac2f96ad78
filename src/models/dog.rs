/// dogs 表中的一行
#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    pub id: String,
    pub name: String,
    pub weight: f64,
}

/// 新增或整行替换时写入的字段，id 由存储层分配
#[derive(Debug, Clone, PartialEq)]
pub struct NewDog {
    pub name: String,
    pub weight: f64,
}
